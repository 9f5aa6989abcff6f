use admissions::applications::{AdmissionsService, InMemoryApplicationStore};
use admissions::config::MockBackendConfig;
use admissions::error::AppError;
use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type SharedService = Arc<AdmissionsService<InMemoryApplicationStore>>;

/// Seed a fresh fixture store and wrap it in the service facade.
pub(crate) fn build_service(
    backend: &MockBackendConfig,
    latency: Duration,
) -> Result<SharedService, AppError> {
    let store = InMemoryApplicationStore::generate(&backend.fixtures)?;
    Ok(Arc::new(AdmissionsService::new(Arc::new(store), latency)))
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
