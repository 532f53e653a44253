use crate::cli::ServeArgs;
use crate::infra::{valuation_engine, AppState};
use crate::routes::valuation_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use startup_valuation::config::AppConfig;
use startup_valuation::error::AppError;
use startup_valuation::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let engine = Arc::new(valuation_engine(&config));
    let app = valuation_routes(engine)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        base_valuation = config.valuation.base_valuation,
        "startup valuation service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
