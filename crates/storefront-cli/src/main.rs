//! CLI entry point - the composition root.
//!
//! Infrastructure is wired together via `bootstrap`; command dispatch routes
//! to handlers which delegate to the `Storefront` facade.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use storefront_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Dispatch to appropriate handler
    let Some(command) = cli.command.as_ref() else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = CliConfig::from_cli(&cli);
    let ctx = bootstrap(&config)?;

    match command {
        Commands::List { search } => handlers::list::execute(&ctx, search.as_deref()).await,
        Commands::Show { id } => handlers::show::execute(&ctx, *id).await,
        Commands::Add { name, price, img } => {
            handlers::add::execute(&ctx, name.clone(), price.clone(), img.clone()).await
        }
        Commands::Remove { id, force } => handlers::remove::execute(&ctx, *id, *force).await,
        Commands::Shop => handlers::shop::execute(&ctx).await,
    }
}

#[tokio::main]
async fn main() {
    // Load environment variables before parsing so env-backed flags see them
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG wins over -v
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err}");
        let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
        std::process::exit(code);
    }
}
