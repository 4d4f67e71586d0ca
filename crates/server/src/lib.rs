//! Motormart Server - HTTP front end for the vehicle catalog
//!
//! This crate serves the catalog pipeline over HTTP. The vehicle collection
//! is loaded once at start-up from a file or URL; every request then replays
//! its search and sort commands on its own copy of the loaded catalog.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Endpoints
//!
//! - `GET /` - Catalog page. Query parameters `make`, `model`, `year`,
//!   `enginesize` run a search, `sort` (`price`, `date`, `year`) orders it
//! - `GET /vehicle.html?id=...` - Detail page for one vehicle
//! - `GET /api/v1/vehicles` - The same listing as JSON
//! - `GET /images/*` - Static images, including the placeholder
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe, 503 when the catalog failed to load
//! - `GET /metrics` - Prometheus metrics

pub mod config;
pub mod error;
pub mod loader;
pub mod middleware;
pub mod page;
pub mod routes;
pub mod server;
pub mod state;
pub mod telemetry;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use loader::DataSource;
pub use server::{build_router, start_server};
pub use state::ServerState;
