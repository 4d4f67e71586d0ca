//! One-shot loading of the vehicle collection.
//!
//! The data source is read exactly once, at start-up. Any failure (I/O, a
//! non-success HTTP status, invalid JSON, a non-array document) is reported as
//! a [`LoadError`] and is never retried.

use std::fmt;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use listing::{parse_collection, LoadError, VehicleRecord};
use tracing::info;

/// Where the vehicle collection comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Url(String),
}

impl DataSource {
    /// `http://` and `https://` values are URLs, everything else is a path.
    pub fn new(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.starts_with("http://") || raw.starts_with("https://") {
            DataSource::Url(raw.to_string())
        } else {
            DataSource::File(PathBuf::from(raw))
        }
    }

    /// Read and parse the collection.
    pub async fn load(&self, timeout: Duration) -> Result<Vec<VehicleRecord>, LoadError> {
        let start = Instant::now();
        let bytes = match self {
            DataSource::File(path) => tokio::fs::read(path).await?,
            DataSource::Url(url) => fetch(url, timeout).await?,
        };
        let records = parse_collection(&bytes)?;
        info!(
            source = %self,
            records = records.len(),
            elapsed_micros = start.elapsed().as_micros(),
            "data_source_loaded"
        );
        Ok(records)
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Url(url) => f.write_str(url),
        }
    }
}

async fn fetch(url: &str, timeout: Duration) -> Result<Vec<u8>, LoadError> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|err| LoadError::Http(err.to_string()))?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|err| LoadError::Http(err.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status(status.as_u16()));
    }

    let body = response
        .bytes()
        .await
        .map_err(|err| LoadError::Http(err.to_string()))?;
    Ok(body.to_vec())
}
