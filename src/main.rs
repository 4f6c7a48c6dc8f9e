use dotenvy::dotenv;
use std::env;
use tracing_subscriber;

use expense_api::{
    api::{config::ApiConfig, routes::create_router},
    expenses::store::ExpenseStore,
    utils::app_config::AppConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenv();
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            env::var("RUST_LOG")
                .unwrap_or_else(|_| "info".to_string())
                .as_str(),
        )
        .init();

    // Load API configuration
    let api_config = ApiConfig::from_env();

    tracing::info!("API configuration loaded successfully");

    // Load the startup snapshot into the in-memory store
    let store = ExpenseStore::from_json_file(&api_config.data_path)?;
    tracing::info!(
        "Loaded {} expenses from {}",
        store.len(),
        api_config.data_path
    );

    let app_config = AppConfig::new(store);

    // Build router with all routes and middleware
    let router = create_router(app_config, &api_config);

    let addr = format!("0.0.0.0:{}", api_config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Starting expense API server on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
