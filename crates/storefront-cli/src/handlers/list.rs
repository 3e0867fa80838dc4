//! List command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::print_item_table;

/// Fetch the catalog and print it, optionally filtered by `search`.
///
/// A failed fetch is reported through the error line of the table and the
/// command exits with the backend error code.
pub async fn execute(ctx: &CliContext, search: Option<&str>) -> Result<()> {
    let refreshed = ctx.storefront().refresh_catalog().await;

    let view = match search {
        Some(term) => ctx.storefront().search(term).await,
        None => ctx.storefront().catalog().await,
    };
    print_item_table(&view);

    if view.total == 0 && refreshed.is_ok() {
        println!("Use 'storefront add' to add your first item.");
    }
    refreshed.map(|_| ()).map_err(|e| CliError::from(e).into())
}
