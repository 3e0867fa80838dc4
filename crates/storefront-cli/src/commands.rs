//! Main commands enum.

use clap::Subcommand;

/// Available storefront commands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// List catalog items
    List {
        /// Only show items whose name or price matches
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show a single item
    Show {
        /// Item ID
        id: i64,
    },

    /// Add an item to the catalog (prompts for missing fields)
    Add {
        /// Item name
        #[arg(long)]
        name: Option<String>,
        /// Price, e.g. "19.99"
        #[arg(long)]
        price: Option<String>,
        /// Image path, e.g. "img/lamp.jpg"
        #[arg(long)]
        img: Option<String>,
    },

    /// Remove an item from the catalog
    Remove {
        /// Item ID
        id: i64,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Start an interactive shopping session with a cart and checkout
    Shop,
}

#[cfg(test)]
mod tests {
    use crate::parser::Cli;
    use clap::Parser;

    use super::*;

    #[test]
    fn test_list_with_search() {
        let cli = Cli::parse_from(["storefront", "list", "--search", "lamp"]);
        assert_eq!(
            cli.command,
            Some(Commands::List {
                search: Some("lamp".to_string())
            })
        );
    }

    #[test]
    fn test_add_partial_flags() {
        let cli = Cli::parse_from(["storefront", "add", "--name", "Lamp"]);
        assert_eq!(
            cli.command,
            Some(Commands::Add {
                name: Some("Lamp".to_string()),
                price: None,
                img: None,
            })
        );
    }

    #[test]
    fn test_remove_force() {
        let cli = Cli::parse_from(["storefront", "remove", "4", "-f"]);
        assert_eq!(cli.command, Some(Commands::Remove { id: 4, force: true }));
    }
}
