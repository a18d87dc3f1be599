mod api;
mod middleware;

use std::sync::Arc;

use lendfinder_core::{load_cities, HubIndex};
use lendfinder_locator::PlacesClient;
use tracing_subscriber::EnvFilter;

use crate::api::{build_app, default_rate_limit_state, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = lendfinder_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::info!(env = %config.env, bind_addr = %config.bind_addr, "starting lendfinder server");

    let hubs = match load_cities(&config.cities_path) {
        Ok(cities) => HubIndex::from_cities(cities),
        Err(e) => {
            tracing::warn!(error = %e, "location hubs unavailable; serving empty hub index");
            HubIndex::default()
        }
    };
    tracing::info!(states = hubs.len(), "loaded location hubs");

    let places = PlacesClient::from_config(&config)?.map(Arc::new);
    if places.is_none() {
        tracing::warn!("LENDFINDER_PLACES_API_TOKEN not set; store search disabled");
    }

    let state = AppState {
        places,
        hubs: Arc::new(hubs),
        max_results: config.max_results,
    };
    let app = build_app(state, default_rate_limit_state());

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
