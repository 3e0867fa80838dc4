//! Interactive shopping session.
//!
//! Reads one command per line: browse and search the catalog, manage the
//! cart, and check out. The session ends on `quit` or end of input.

use anyhow::Result;
use storefront_app::{AppError, ShippingDetails, ShippingField};
use storefront_core::ItemId;

use crate::bootstrap::CliContext;
use crate::presentation::{print_cart, print_item_table, print_receipt};
use crate::utils::input;

const HELP: &str = "\
Commands:
  list                 show all items
  search <term>        filter items by name or price
  refresh              reload items from the server
  dismiss              clear the catalog error
  add <id>             put one unit of an item in the cart
  qty <id> <n>         set the quantity of a cart line
  inc <id> / dec <id>  change a cart line by one
  rm <id>              remove a cart line
  cart                 show the cart and totals
  clear                empty the cart
  checkout             enter shipping details and place the order
  help                 show this help
  quit                 leave the shop";

/// One parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShopCommand {
    List,
    Search(String),
    Refresh,
    Dismiss,
    Add(ItemId),
    Quantity(ItemId, i64),
    Increment(ItemId),
    Decrement(ItemId),
    Remove(ItemId),
    Cart,
    Clear,
    Checkout,
    Help,
    Quit,
}

fn parse_id(arg: Option<&str>) -> Result<ItemId, String> {
    let arg = arg.ok_or_else(|| "missing item ID".to_string())?;
    arg.parse()
        .map_err(|_| format!("'{arg}' is not a valid item ID"))
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<ShopCommand>, String> {
    let line = line.trim();
    let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();
    let mut args = rest.split_whitespace();

    let command = match verb.to_lowercase().as_str() {
        "" => return Ok(None),
        "list" | "ls" => ShopCommand::List,
        "search" | "find" => ShopCommand::Search(rest.to_string()),
        "refresh" => ShopCommand::Refresh,
        "dismiss" => ShopCommand::Dismiss,
        "add" => ShopCommand::Add(parse_id(args.next())?),
        "qty" => {
            let id = parse_id(args.next())?;
            let quantity = args
                .next()
                .ok_or_else(|| "missing quantity".to_string())?
                .parse()
                .map_err(|_| "quantity must be a whole number".to_string())?;
            ShopCommand::Quantity(id, quantity)
        }
        "inc" | "+" => ShopCommand::Increment(parse_id(args.next())?),
        "dec" | "-" => ShopCommand::Decrement(parse_id(args.next())?),
        "rm" | "remove" => ShopCommand::Remove(parse_id(args.next())?),
        "cart" => ShopCommand::Cart,
        "clear" => ShopCommand::Clear,
        "checkout" => ShopCommand::Checkout,
        "help" | "?" => ShopCommand::Help,
        "quit" | "exit" | "q" => ShopCommand::Quit,
        other => return Err(format!("unknown command '{other}', type 'help'")),
    };
    Ok(Some(command))
}

fn report(err: &AppError) {
    eprintln!("Error: {err}");
}

/// Prompt for every shipping field, offering previous answers as defaults.
fn prompt_shipping(details: &mut ShippingDetails) -> Result<()> {
    for field in ShippingField::ALL {
        let current = details.get(field).to_string();
        let default = (!current.is_empty()).then_some(current.as_str());
        let value = input::prompt_string_with_default(field.label(), default)?;
        details.set(field, value);
    }
    Ok(())
}

async fn checkout(ctx: &CliContext, details: &mut ShippingDetails) -> Result<()> {
    if ctx.storefront().cart().await.is_empty() {
        println!("No items to checkout");
        return Ok(());
    }

    loop {
        prompt_shipping(details)?;

        let errors = details.errors();
        if errors.is_empty() {
            break;
        }
        for (field, message) in errors.iter() {
            eprintln!("  {}: {message}", field.label());
        }
        if !input::prompt_confirmation("Fix the details and try again?")? {
            println!("Checkout cancelled.");
            return Ok(());
        }
    }

    match ctx.storefront().checkout(details).await {
        Ok(receipt) => {
            print_receipt(&receipt);
            *details = ShippingDetails::new();
        }
        Err(err) => report(&err),
    }
    Ok(())
}

/// Run one command. Returns `false` when the session should end.
async fn dispatch(ctx: &CliContext, command: ShopCommand, details: &mut ShippingDetails) -> Result<bool> {
    let shop = ctx.storefront();
    match command {
        ShopCommand::List => print_item_table(&shop.catalog().await),
        ShopCommand::Search(term) => print_item_table(&shop.search(&term).await),
        ShopCommand::Refresh => match shop.refresh_catalog().await {
            Ok(view) => print_item_table(&view),
            Err(err) => report(&err),
        },
        ShopCommand::Dismiss => shop.clear_catalog_error().await,
        ShopCommand::Add(id) => match shop.add_to_cart(id).await {
            Ok(cart) => println!("Added. Cart now holds {} item(s).", cart.summary.item_count),
            Err(err) => report(&err),
        },
        ShopCommand::Quantity(id, quantity) => {
            if quantity < 1 {
                println!("Quantity must be at least 1; use 'rm {id}' to remove the line.");
            }
            print_cart(&shop.update_quantity(id, quantity).await);
        }
        ShopCommand::Increment(id) => print_cart(&shop.increment_quantity(id).await),
        ShopCommand::Decrement(id) => print_cart(&shop.decrement_quantity(id).await),
        ShopCommand::Remove(id) => print_cart(&shop.remove_from_cart(id).await),
        ShopCommand::Cart => print_cart(&shop.cart().await),
        ShopCommand::Clear => {
            shop.clear_cart().await;
            println!("Cart cleared.");
        }
        ShopCommand::Checkout => checkout(ctx, details).await?,
        ShopCommand::Help => println!("{HELP}"),
        ShopCommand::Quit => return Ok(false),
    }
    Ok(true)
}

/// Execute the shop command.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    match ctx.storefront().refresh_catalog().await {
        Ok(view) => print_item_table(&view),
        Err(err) => report(&err),
    }
    println!("\nType 'help' for commands.");

    let mut details = ShippingDetails::new();
    while let Some(line) = input::prompt_line("shop> ")? {
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                eprintln!("{message}");
                continue;
            }
        };
        if !dispatch(ctx, command, &mut details).await? {
            break;
        }
    }

    let cart = ctx.storefront().cart().await;
    if !cart.is_empty() {
        println!("Leaving with {} item(s) in the cart.", cart.summary.item_count);
    }
    Ok(())
}
