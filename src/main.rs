use gohan_api::api::{create_router, AppState};
use gohan_api::catalog::Catalog;
use gohan_api::config::Config;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("gohan_api=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let catalog = Catalog::builtin();
    tracing::info!(
        dishes = catalog.all_dishes().len(),
        tags = catalog.all_tags().len(),
        "Catalog loaded"
    );

    // Initialize application state
    let state = AppState::new(catalog, config.rng_seed);

    // Create the router with all routes
    let app = create_router(state);

    // Start the server
    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!(address = %config.bind_address(), "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
