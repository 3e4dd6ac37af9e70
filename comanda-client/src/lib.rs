//! Backend client for the Comanda customer hub
//!
//! Catalog reads and order submission against the hosted backend.
//! Network policy (timeouts, error mapping) lives here; the domain core
//! in `comanda-core` stays pure and keeps its state untouched when a
//! call fails, so the customer can retry without re-entering
//! selections.

pub mod catalog;
pub mod config;
pub mod error;
pub mod http;
pub mod orders;

// Re-exports
pub use catalog::{CatalogSource, HttpCatalogClient, StaticCatalog};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use orders::{HttpOrderClient, OrderGateway, RecordingGateway};
