use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use temporada_web::cache::start_cache_warmer;
use temporada_web::catalog::Catalog;
use temporada_web::config::Config;
use temporada_web::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("temporada_web=debug,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let catalog = Catalog::load(config.catalog_path.as_deref())?;
    info!(listings = catalog.len(), "Catalog loaded");

    let addr = config.bind_addr();
    let state = AppState::new(catalog, config);

    tokio::spawn(start_cache_warmer(
        state.cache.clone(),
        state.catalog.clone(),
        state.config.default_page_size,
        state.config.cache_ttl,
    ));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);
    axum::serve(listener, app(state)).await?;

    Ok(())
}
