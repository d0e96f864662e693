use crate::cli::ServeArgs;
use crate::infra::{catalog_source, load_catalog, AppState};
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use shot_coach::coaching::CoachingEngine;
use shot_coach::config::AppConfig;
use shot_coach::error::AppError;
use shot_coach::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut config: AppConfig, mut args: ServeArgs) -> Result<(), AppError> {
    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let catalog_path = config.catalog.path.clone();
    let catalog = load_catalog(catalog_path.as_deref())?;
    let engine = Arc::new(CoachingEngine::new(catalog));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        engine: engine.clone(),
        catalog_path,
    };

    let source = catalog_source(app_state.catalog_path.as_deref());
    let app = with_service_routes(engine)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, catalog = %source, "shot coach service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
