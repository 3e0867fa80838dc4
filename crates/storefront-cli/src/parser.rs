//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the storefront.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "Browse the item catalog, fill a cart and check out")]
#[command(version)]
pub struct Cli {
    /// Base URL of the items API
    #[arg(long = "api-url", env = "STOREFRONT_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Base URL item images are served from (defaults to the API URL)
    #[arg(long = "static-url", env = "STOREFRONT_STATIC_URL", global = true)]
    pub static_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long = "timeout", global = true)]
    pub timeout_secs: Option<u64>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Default tracing filter for this invocation.
    pub const fn log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "storefront",
            "--verbose",
            "--api-url",
            "http://shop.test:9000",
            "list",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.api_url.as_deref(), Some("http://shop.test:9000"));
        assert_eq!(cli.log_filter(), "debug");
    }

    #[test]
    fn test_global_args_after_subcommand() {
        let cli = Cli::parse_from(["storefront", "show", "3", "--timeout", "2"]);
        assert_eq!(cli.timeout_secs, Some(2));
        assert_eq!(cli.log_filter(), "warn");
    }
}
