use anyhow::Result;
use axum::{extract::DefaultBodyLimit, routing::get, routing::post, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;

use crate::{
    config::Config,
    handlers::{self, AppState},
    metrics,
    pricing::PricingEngine,
    signals::setup_signal_handlers,
    templates::TemplateSet,
};

/// Form posts are a handful of short fields
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Start the quote server
///
/// This function:
/// 1. Initializes metrics (when enabled)
/// 2. Loads templates and builds the pricing engine
/// 3. Sets up signal handlers for graceful shutdown and policy reload
/// 4. Binds to the configured address
/// 5. Serves requests with graceful shutdown support
pub async fn start_server(config: Config, config_path: PathBuf) -> Result<()> {
    let metrics_handle = if config.metrics.enabled {
        info!("Initializing Prometheus metrics...");
        Some(Arc::new(metrics::init_metrics()?))
    } else {
        None
    };

    let templates = TemplateSet::from_dir(config.server.templates_dir.as_deref())?;
    let app_state = AppState::new(PricingEngine::new(config.pricing.clone()), templates);

    // Setup signal handlers (SIGTERM, SIGINT for shutdown; SIGHUP for reload)
    let (shutdown_tx, signal_handle) =
        setup_signal_handlers(app_state.engine.clone(), config_path);
    let mut shutdown_rx = shutdown_tx.subscribe();

    let app = create_router(&config, app_state, metrics_handle);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    info!("Starting rental quote server on {}", addr);
    info!(
        weekend_pricing = config.pricing.weekend_pricing,
        round_to_whole_units = config.pricing.round_to_whole_units,
        metrics = config.metrics.enabled,
        "Serving static files from '{}', pictures from '{}'",
        config.server.static_dir,
        config.server.pictures_dir
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.recv().await;
            info!("Shutdown signal received, draining connections...");
        })
        .await?;

    signal_handle.await?;
    info!("Server stopped gracefully");

    Ok(())
}

/// Create the Axum router with all routes and middleware
pub fn create_router(
    config: &Config,
    app_state: AppState,
    metrics_handle: Option<Arc<PrometheusHandle>>,
) -> Router {
    let mut app = Router::new()
        .route(
            "/",
            get(handlers::quote::show_form).post(handlers::quote::submit_form),
        )
        .route("/api/quote", post(handlers::api::quote))
        .route("/health", get(handlers::health::health_check))
        .with_state(app_state);

    if let Some(handle) = metrics_handle {
        app = app.merge(
            Router::new()
                .route(
                    &config.metrics.endpoint,
                    get(handlers::metrics_handler::metrics),
                )
                .with_state(handle),
        );
    }

    app.nest_service("/pictures", ServeDir::new(&config.server.pictures_dir))
        .fallback_service(ServeDir::new(&config.server.static_dir))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
}
