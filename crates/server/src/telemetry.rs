//! Tracing and Prometheus wiring.
//!
//! The pipeline crates expose metrics hooks without depending on a backend.
//! [`ServerMetrics`] bridges both hooks to the `metrics` facade, and
//! [`install_metrics`] installs the Prometheus recorder that `/metrics`
//! renders from.

use std::sync::Arc;
use std::time::Duration;

use matcher::{set_match_metrics, MatchMetrics};
use metrics::{counter, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use motormart::{set_pipeline_metrics, PipelineMetrics, PipelineStage};

/// Forwards filter and pipeline stage observations to the `metrics` facade.
#[derive(Debug, Default)]
pub struct ServerMetrics;

impl MatchMetrics for ServerMetrics {
    fn record_filter(&self, latency: Duration, scanned: usize, hits: usize) {
        counter!("motormart_filter_runs_total").increment(1);
        histogram!("motormart_filter_seconds").record(latency.as_secs_f64());
        histogram!("motormart_filter_scanned").record(scanned as f64);
        histogram!("motormart_filter_hits").record(hits as f64);
    }
}

impl PipelineMetrics for ServerMetrics {
    fn record_stage(&self, stage: PipelineStage, latency: Duration, size: usize) {
        histogram!("motormart_stage_seconds", "stage" => stage.as_str())
            .record(latency.as_secs_f64());
        histogram!("motormart_stage_size", "stage" => stage.as_str()).record(size as f64);
    }
}

/// Install structured JSON logging at the configured level.
pub fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(false)
        .with_thread_ids(true)
        .with_thread_names(true)
        .json()
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {err}"))
}

/// Install the process-wide Prometheus recorder and the pipeline hooks.
///
/// Must be called at most once per process.
pub fn install_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    let recorder = Arc::new(ServerMetrics);
    set_match_metrics(Some(recorder.clone()));
    set_pipeline_metrics(Some(recorder));
    Ok(handle)
}
