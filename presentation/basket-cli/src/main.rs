use std::fs;
use std::path::PathBuf;

use clap::Parser;
use dotenvy::dotenv;

mod config {
    pub mod app_config;
}
mod order {
    pub mod dto;
}
mod setup {
    pub mod dependency_injection;
}

use config::app_config::AppConfig;
use order::dto::OrderRequest;
use setup::dependency_injection::DependencyContainer;

/// Prices a basket of catalog products after redeeming gift vouchers.
#[derive(Debug, Parser)]
#[command(name = "basket-cli", version)]
struct Cli {
    /// JSON order file with `product_ids` and `vouchers`
    order: PathBuf,

    /// Catalog file to use instead of CATALOG_PATH
    #[arg(long)]
    catalog: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter, keeping stdout for the result
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let cli = Cli::parse();
    let config = AppConfig::from_env().with_catalog_override(cli.catalog);

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config)?;

    // 5. Price the order
    tracing::info!(
        order = %cli.order.display(),
        catalog = %config.catalog.path.display(),
        "pricing order"
    );
    let request: OrderRequest = serde_json::from_str(&fs::read_to_string(&cli.order)?)?;
    let summary = container.price_basket.execute(request.into_params()?)?;

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
