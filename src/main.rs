use anyhow::Context;
use clap::Parser;
use pincode_catalog::api::{build_router, AppState};
use pincode_catalog::core::{ConfigProvider, DatasetOrigin};
use pincode_catalog::utils::{logger, validation::Validate};
use pincode_catalog::{Catalog, CatalogError, CliConfig, DatasetLoader, LocalStorage, TomlConfig};

/// Flags, or the TOML file named by `--config`, validated either way.
fn resolve_config(cli: &CliConfig) -> Result<Box<dyn ConfigProvider>, CatalogError> {
    match &cli.config {
        Some(path) => {
            let config = TomlConfig::from_file(path)?;
            config.validate()?;
            Ok(Box::new(config))
        }
        None => {
            cli.validate()?;
            Ok(Box::new(cli.clone()))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    logger::init_logger(cli.verbose, cli.json_logs || config.json_logs());

    tracing::info!("Starting pincode-catalog");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let loader = DatasetLoader::new(LocalStorage::default());
    let (dataset, origin) = loader.load_or_sample(config.data_file()).await;
    if origin == DatasetOrigin::Sample {
        tracing::warn!("Fix {} and restart to serve real data", config.data_file());
    }

    let catalog = Catalog::new(dataset, origin);
    let stats = catalog.stats();
    let state = AppState::new(catalog, config.as_ref());
    tracing::info!("Serving static files from: {}", state.static_dir.display());
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind((config.host(), config.port()))
        .await
        .with_context(|| format!("failed to bind to {}:{}", config.host(), config.port()))?;
    let addr = listener.local_addr()?;

    tracing::info!(
        "Catalog ready: {} products, {} pincodes (source: {})",
        stats.products,
        stats.pincodes,
        stats.source
    );
    tracing::info!("Listening on http://{}", addr);
    tracing::info!("  GET /api/products?page=&limit=&in_stock=");
    tracing::info!("  GET /api/products/:product_id");
    tracing::info!("  GET /api/pincode/:pincode");
    tracing::info!("  GET /health");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
