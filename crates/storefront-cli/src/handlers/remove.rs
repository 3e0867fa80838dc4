//! Remove command handler.
//!
//! Deletes an item from the backend catalog.

use anyhow::Result;
use storefront_core::ItemId;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::print_item_detail;
use crate::utils::input;

/// Execute the remove command.
///
/// Shows the item and asks for confirmation unless `force` is set. A
/// missing item is reported as "Item not found".
pub async fn execute(ctx: &CliContext, id: ItemId, force: bool) -> Result<()> {
    if !force {
        let item = ctx
            .storefront()
            .get_item(id)
            .await
            .map_err(CliError::from)?;
        print_item_detail(&item, &ctx.image_url(&item.img));
        println!();

        let confirm =
            input::prompt_confirmation("Are you sure you want to remove this item from the catalog?")?;
        if !confirm {
            println!("Remove operation cancelled.");
            return Ok(());
        }
    }

    ctx.storefront()
        .delete_item(id)
        .await
        .map_err(CliError::from)?;

    println!("Item {id} removed from the catalog.");
    Ok(())
}
