use metrics_exporter_prometheus::PrometheusHandle;
use shot_coach::coaching::{CoachingEngine, FlawCatalog};
use shot_coach::error::AppError;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) engine: Arc<CoachingEngine>,
    pub(crate) catalog_path: Option<PathBuf>,
}

/// Load the catalog from `path`, or the built-in one when no path is set.
pub(crate) fn load_catalog(path: Option<&Path>) -> Result<FlawCatalog, AppError> {
    match path {
        Some(path) => Ok(FlawCatalog::from_path(path)?),
        None => {
            let catalog = FlawCatalog::standard()?;
            info!(
                flaws = catalog.flaws().len(),
                "using built-in flaw catalog"
            );
            Ok(catalog)
        }
    }
}

pub(crate) fn catalog_source(path: Option<&Path>) -> String {
    path.map(|path| path.display().to_string())
        .unwrap_or_else(|| "built-in".to_string())
}
