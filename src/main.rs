use clap::Parser;
use std::time::Duration;
use store_locator::utils::{logger, validation::Validate};
use store_locator::{
    AppConfig, CliConfig, Command, FileCatalog, PostcodesIoResolver, StoreQueryService,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting store-locator CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = AppConfig::resolve(&cli)?;
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    // Explicit composition root: concrete adapters are constructed here
    // and handed to the query service.
    let catalog = FileCatalog::new(config.stores_file.clone());
    let resolver = PostcodesIoResolver::new(
        config.postcodes_url.clone(),
        Duration::from_secs(config.timeout_seconds),
    )?;
    let service = StoreQueryService::new(catalog, resolver, config.min_resolution_rate);

    let result = match &cli.command {
        Command::List => service.list_stores().await,
        Command::Nearby {
            postcode,
            radius_km,
        } => {
            tracing::info!("Finding stores within {} km of {}", radius_km, postcode);
            service.nearby_stores(postcode, *radius_km).await
        }
    };

    match result {
        Ok(stores) => {
            tracing::info!("Query returned {} stores", stores.len());
            println!("{}", serde_json::to_string_pretty(&stores)?);
        }
        Err(e) => {
            tracing::error!("Query failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
