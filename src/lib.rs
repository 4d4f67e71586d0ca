//! Workspace umbrella crate for the Motormart vehicle catalog.
//!
//! This crate stitches the listing, matcher, sorter and presenter stages
//! together behind an explicit [`CatalogContext`] so callers drive the whole
//! catalog through four commands: load complete, load failed, search submit
//! and sort change.
//!
//! ```
//! use motormart::{CatalogContext, RenderInstruction, SearchQuery, SortKey};
//!
//! let records = motormart::parse_collection(br#"[
//!     {"id": "1", "make": "Toyota", "model": "Corolla", "price": 15000},
//!     {"id": "2", "make": "Toyota", "model": "Auris", "price": 12000},
//!     {"id": "3", "make": "Honda", "model": "Civic", "price": 14000}
//! ]"#).unwrap();
//!
//! let (ctx, _) = CatalogContext::default().on_load_complete(records);
//! let (ctx, _) = ctx.on_search_submit(&SearchQuery::default().with_make("toyota"));
//! let (ctx, shown) = ctx.on_sort_change(SortKey::parse("price"));
//! assert_eq!(shown, RenderInstruction::Listing(vec![1, 0]));
//! assert!(ctx.render_html(&shown).contains("Auris"));
//! ```

pub mod config;
mod context;

pub use listing::{
    parse_collection, CollectionError, EngineSize, LoadError, Scalar, VehicleRecord, WorkingSubset,
};
pub use matcher::{SearchForm, SearchQuery};
pub use presenter::{Notice, PresenterSettings, Projection, VehicleCard};
pub use sorter::SortKey;

pub use crate::config::{CatalogConfig, ConfigLoadError};
pub use crate::context::{CatalogContext, Controls, Phase, RenderInstruction};

use std::sync::{Arc, OnceLock, RwLock};
use std::time::{Duration, Instant};

/// Pipeline stages reported to [`PipelineMetrics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineStage {
    Search,
    Sort,
    Render,
}

impl PipelineStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::Search => "search",
            PipelineStage::Sort => "sort",
            PipelineStage::Render => "render",
        }
    }
}

/// Metrics observer for pipeline stages.
///
/// `size` is the number of indices a search or sort produced, or the number
/// of projections a render produced.
pub trait PipelineMetrics: Send + Sync {
    fn record_stage(&self, stage: PipelineStage, latency: Duration, size: usize);
}

/// Install or clear the global pipeline metrics recorder.
pub fn set_pipeline_metrics(recorder: Option<Arc<dyn PipelineMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn PipelineMetrics>>> {
    static METRICS: OnceLock<RwLock<Option<Arc<dyn PipelineMetrics>>>> = OnceLock::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

fn metrics_recorder() -> Option<Arc<dyn PipelineMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

pub(crate) struct MetricsSpan {
    recorder: Arc<dyn PipelineMetrics>,
    start: Instant,
}

impl MetricsSpan {
    pub(crate) fn start() -> Option<Self> {
        metrics_recorder().map(|recorder| Self {
            recorder,
            start: Instant::now(),
        })
    }

    pub(crate) fn record(self, stage: PipelineStage, size: usize) {
        self.recorder
            .record_stage(stage, self.start.elapsed(), size);
    }
}
