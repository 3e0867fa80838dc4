//! Show command handler.

use anyhow::Result;
use storefront_core::ItemId;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::print_item_detail;

/// Fetch one item from the backend and print it.
pub async fn execute(ctx: &CliContext, id: ItemId) -> Result<()> {
    let item = ctx
        .storefront()
        .get_item(id)
        .await
        .map_err(CliError::from)?;
    print_item_detail(&item, &ctx.image_url(&item.img));
    Ok(())
}
