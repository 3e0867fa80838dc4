//! Add command handler.
//!
//! Creates a catalog item. Fields not given as flags are prompted for;
//! the form is validated before anything is sent.

use anyhow::Result;
use storefront_app::{ItemField, ItemForm};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::utils::input;

/// Fill an item form from flags, leaving absent fields empty.
pub fn form_from_flags(name: Option<String>, price: Option<String>, img: Option<String>) -> ItemForm {
    let mut form = ItemForm::new();
    for (field, value) in [
        (ItemField::Name, name),
        (ItemField::Price, price),
        (ItemField::Img, img),
    ] {
        if let Some(value) = value {
            form.set(field, value);
        }
    }
    form
}

fn prompt_label(field: ItemField) -> &'static str {
    match field {
        ItemField::Name => "Item name",
        ItemField::Price => "Price",
        ItemField::Img => "Image path",
    }
}

/// Execute the add command.
pub async fn execute(
    ctx: &CliContext,
    name: Option<String>,
    price: Option<String>,
    img: Option<String>,
) -> Result<()> {
    let mut form = form_from_flags(name, price, img);

    for field in [ItemField::Name, ItemField::Price, ItemField::Img] {
        if form.get(field).trim().is_empty() {
            let value = input::prompt_string(prompt_label(field))?;
            form.set(field, value);
        }
    }

    let errors = form.errors();
    if !errors.is_empty() {
        for (field, message) in errors.iter() {
            eprintln!("  {field}: {message}");
        }
        return Err(CliError::Arguments("the item was not added".to_string()).into());
    }

    let name = form.get(ItemField::Name).trim().to_string();
    ctx.storefront()
        .create_item(&mut form)
        .await
        .map_err(CliError::from)?;

    println!("Item '{name}' added to the catalog.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_from_flags() {
        let form = form_from_flags(Some("Lamp".into()), None, Some("img/lamp.jpg".into()));
        assert_eq!(form.get(ItemField::Name), "Lamp");
        assert_eq!(form.get(ItemField::Price), "");
        assert_eq!(form.get(ItemField::Img), "img/lamp.jpg");
    }

    #[test]
    fn test_complete_flags_validate() {
        let form = form_from_flags(Some("Lamp".into()), Some("80".into()), Some("img/lamp.jpg".into()));
        let draft = form.validate().unwrap();
        assert_eq!(draft.price, "80");
    }
}
