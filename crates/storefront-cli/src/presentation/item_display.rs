//! Catalog rendering.

use storefront_app::types::{CatalogView, ItemView};

use super::tables::{print_separator, truncate_string};

/// Print the catalog as a table, with the status line above it.
pub fn print_item_table(view: &CatalogView) {
    if let Some(error) = &view.error {
        eprintln!("Error: {error}");
    }
    if view.loading {
        println!("Loading items...");
    }

    if view.items.is_empty() {
        if view.total == 0 {
            println!("No items in the catalog.");
        } else {
            println!("No items match your search.");
        }
        return;
    }

    if view.shown() == view.total {
        println!("{} item(s):\n", view.total);
    } else {
        println!("Showing {} of {} items:\n", view.shown(), view.total);
    }

    println!("{:<5} {:<30} {:>10}  Image", "ID", "Name", "Price");
    print_separator(70);
    for item in &view.items {
        println!(
            "{:<5} {:<30} {:>10}  {}",
            item.id,
            truncate_string(&item.name, 29),
            item.display_price(),
            truncate_string(&item.img, 20)
        );
    }
}

/// Print one item with its resolved image URL.
pub fn print_item_detail(item: &ItemView, image_url: &str) {
    println!("Item #{}", item.id);
    print_separator(40);
    println!("Name:  {}", item.name);
    println!("Price: {}", item.display_price());
    println!("Image: {image_url}");
}
