use metrics_exporter_prometheus::PrometheusHandle;
use startup_valuation::config::AppConfig;
use startup_valuation::workflows::valuation::ValuationEngine;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn valuation_engine(config: &AppConfig) -> ValuationEngine {
    ValuationEngine::new(config.valuation.estimation_config())
}
