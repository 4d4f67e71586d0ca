//! The catalog context and its command handlers.
//!
//! Every handler takes the context by value and returns the next context
//! together with a [`RenderInstruction`]. Nothing here is async or shared:
//! callers that serve many requests clone a loaded context per request, which
//! only bumps the `Arc` around the source collection.

use std::sync::Arc;

use listing::{full_subset, LoadError, VehicleRecord, WorkingSubset};
use matcher::{filter_collection, SearchQuery};
use presenter::{present, render_grid, Notice, PresenterSettings, Projection};
use serde::{Deserialize, Serialize};
use sorter::{sort_input, sort_subset, SortKey};
use tracing::{error, info};

use crate::{MetricsSpan, PipelineStage};

/// Which optional page controls are present.
///
/// A missing control disables its feature: without a search control every
/// submit shows the full collection, without a sort control every sort
/// change is a pass-through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    #[serde(default = "enabled")]
    pub search: bool,
    #[serde(default = "enabled")]
    pub sort: bool,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            search: true,
            sort: true,
        }
    }
}

fn enabled() -> bool {
    true
}

/// Lifecycle of the source collection.
#[derive(Debug, Clone, Default)]
pub enum Phase {
    /// Nothing loaded yet.
    #[default]
    Unset,
    /// Loaded. `subset` is the result of the most recent search.
    Ready {
        source: Arc<[VehicleRecord]>,
        subset: WorkingSubset,
    },
    /// The load failed. Terminal for the lifetime of the context.
    Failed { reason: String },
}

/// What the grid should show after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderInstruction {
    /// Render these source indices, in order. Empty renders the
    /// "No vehicles found." notice.
    Listing(WorkingSubset),
    /// Render the load-failure notice.
    LoadFailed,
}

/// Explicit state for one catalog page.
#[derive(Debug, Clone, Default)]
pub struct CatalogContext {
    phase: Phase,
    active_sort: Option<SortKey>,
    controls: Controls,
    settings: Arc<PresenterSettings>,
}

impl CatalogContext {
    pub fn new(controls: Controls, settings: PresenterSettings) -> Self {
        Self {
            phase: Phase::Unset,
            active_sort: None,
            controls,
            settings: Arc::new(settings),
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn active_sort(&self) -> Option<SortKey> {
        self.active_sort
    }

    pub fn controls(&self) -> Controls {
        self.controls
    }

    pub fn settings(&self) -> &PresenterSettings {
        &self.settings
    }

    /// The loaded collection; empty unless the phase is `Ready`.
    pub fn source(&self) -> &[VehicleRecord] {
        match &self.phase {
            Phase::Ready { source, .. } => source,
            Phase::Unset | Phase::Failed { .. } => &[],
        }
    }

    /// The current working subset; empty unless the phase is `Ready`.
    pub fn subset(&self) -> &[usize] {
        match &self.phase {
            Phase::Ready { subset, .. } => subset,
            Phase::Unset | Phase::Failed { .. } => &[],
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.phase, Phase::Failed { .. })
    }

    /// What the grid shows right now, without running a command.
    pub fn current(&self) -> RenderInstruction {
        match &self.phase {
            Phase::Failed { .. } => RenderInstruction::LoadFailed,
            Phase::Unset | Phase::Ready { .. } => RenderInstruction::Listing(self.subset().to_vec()),
        }
    }

    /// The collection arrived. The working subset becomes the full collection.
    pub fn on_load_complete(mut self, records: Vec<VehicleRecord>) -> (Self, RenderInstruction) {
        if self.is_failed() {
            return (self, RenderInstruction::LoadFailed);
        }
        let subset = full_subset(records.len());
        info!(records = records.len(), "catalog_loaded");
        self.phase = Phase::Ready {
            source: records.into(),
            subset: subset.clone(),
        };
        (self, RenderInstruction::Listing(subset))
    }

    /// The collection could not be loaded. Logged once; never retried.
    pub fn on_load_failed(mut self, err: &LoadError) -> (Self, RenderInstruction) {
        if !self.is_failed() {
            error!(error = %err, "catalog_load_failed");
            self.phase = Phase::Failed {
                reason: err.to_string(),
            };
        }
        (self, RenderInstruction::LoadFailed)
    }

    /// Replace the working subset with the records matching `query`.
    ///
    /// The result is rendered in source order; the active sort is not
    /// re-applied until the next sort change.
    pub fn on_search_submit(mut self, query: &SearchQuery) -> (Self, RenderInstruction) {
        let search_enabled = self.controls.search;
        let instruction = match &mut self.phase {
            Phase::Unset => RenderInstruction::Listing(Vec::new()),
            Phase::Failed { .. } => RenderInstruction::LoadFailed,
            Phase::Ready { source, subset } => {
                let span = MetricsSpan::start();
                *subset = if search_enabled {
                    filter_collection(source, query)
                } else {
                    full_subset(source.len())
                };
                if let Some(span) = span {
                    span.record(PipelineStage::Search, subset.len());
                }
                RenderInstruction::Listing(subset.clone())
            }
        };
        (self, instruction)
    }

    /// Order the working subset by `key`.
    ///
    /// Sorts the working subset, or the whole collection when the subset is
    /// empty. The subset itself keeps its filter order. `None` renders the
    /// same input unsorted.
    pub fn on_sort_change(mut self, key: Option<SortKey>) -> (Self, RenderInstruction) {
        if !self.controls.sort {
            let instruction = match &self.phase {
                Phase::Unset => RenderInstruction::Listing(Vec::new()),
                Phase::Failed { .. } => RenderInstruction::LoadFailed,
                Phase::Ready { subset, .. } => RenderInstruction::Listing(subset.clone()),
            };
            return (self, instruction);
        }

        self.active_sort = key;
        let instruction = match &self.phase {
            Phase::Unset => RenderInstruction::Listing(Vec::new()),
            Phase::Failed { .. } => RenderInstruction::LoadFailed,
            Phase::Ready { source, subset } => {
                let span = MetricsSpan::start();
                let ordered = sort_subset(source, &sort_input(source, subset), key);
                if let Some(span) = span {
                    span.record(PipelineStage::Sort, ordered.len());
                }
                RenderInstruction::Listing(ordered)
            }
        };
        (self, instruction)
    }

    /// Turn an instruction into display-safe projections.
    pub fn render(&self, instruction: &RenderInstruction) -> Vec<Projection> {
        let span = MetricsSpan::start();
        let projections = match instruction {
            RenderInstruction::LoadFailed => vec![Projection::Notice(Notice::LoadFailed)],
            RenderInstruction::Listing(indices) => present(self.source(), indices, &self.settings),
        };
        if let Some(span) = span {
            span.record(PipelineStage::Render, projections.len());
        }
        projections
    }

    /// Render an instruction straight to grid markup.
    pub fn render_html(&self, instruction: &RenderInstruction) -> String {
        render_grid(&self.render(instruction))
    }
}
