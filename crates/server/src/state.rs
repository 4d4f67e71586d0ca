use crate::config::ServerConfig;
use crate::loader::DataSource;
use metrics_exporter_prometheus::PrometheusHandle;
use motormart::{CatalogConfig, CatalogContext};
use std::sync::Arc;
use std::time::Instant;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// The catalog after the one-shot load. Handlers clone it per request.
    pub catalog: CatalogContext,

    /// Prometheus handle, present when metrics are enabled
    pub prometheus: Option<PrometheusHandle>,

    /// Process start, for uptime reporting
    pub started: Instant,
}

impl ServerState {
    /// Wrap an already-loaded catalog.
    pub fn new(config: ServerConfig, catalog: CatalogContext) -> Self {
        Self {
            config: Arc::new(config),
            catalog,
            prometheus: None,
            started: Instant::now(),
        }
    }

    pub fn with_prometheus(mut self, handle: PrometheusHandle) -> Self {
        self.prometheus = Some(handle);
        self
    }

    /// Read the catalog settings and load the data source.
    ///
    /// A load failure does not fail start-up: the catalog enters its
    /// terminal failed phase and every page renders the failure notice.
    /// A bad catalog configuration file does fail start-up.
    pub async fn bootstrap(config: ServerConfig) -> anyhow::Result<Self> {
        let catalog_config = match &config.catalog_config {
            Some(path) => CatalogConfig::from_file(path)?,
            None => CatalogConfig::default(),
        };

        let source = DataSource::new(&config.data_source);
        let context = catalog_config.context();
        let (catalog, _) = match source.load(config.timeout()).await {
            Ok(records) => {
                metrics::gauge!("motormart_catalog_records").set(records.len() as f64);
                context.on_load_complete(records)
            }
            Err(err) => context.on_load_failed(&err),
        };

        Ok(Self::new(config, catalog))
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started.elapsed().as_secs()
    }
}
