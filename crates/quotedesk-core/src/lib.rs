//! # Quotedesk Core
//!
//! Market reference data service for the quotedesk trading journal.
//!
//! ## Overview
//!
//! This crate owns the lifecycle of the symbol reference dataset consumed
//! by the journal's forms and tables:
//!
//! - **Feed ingest**: fetch a loosely-structured CSV price sheet over HTTP,
//!   parse it defensively, and validate every row
//! - **Fuzzy search index** over symbol and company name, symbol-weighted
//! - **Caching and single-flight refresh**: one fetch per staleness window,
//!   concurrent callers share the in-flight load
//! - **Fallback substitution**: an embedded dataset keeps every query
//!   answerable when the upstream is unreachable or malformed
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`breaker`] | Circuit breaker for the upstream feed |
//! | [`config`] | Service configuration and env overrides |
//! | [`domain`] | Domain models (StockRecord, Dataset, Symbol) |
//! | [`error`] | Validation and feed error types |
//! | [`fallback`] | Embedded dataset of last resort |
//! | [`feed`] | Defensive CSV feed parsing |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`search`] | Fuzzy lookup index |
//! | [`service`] | The reference data service façade |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use quotedesk_core::ReferenceDataService;
//!
//! #[tokio::main]
//! async fn main() {
//!     let service = ReferenceDataService::from_env();
//!
//!     // Never fails: the worst case is fallback data.
//!     let hits = service.search("tcs", 10).await;
//!     for record in hits {
//!         println!("{} @ {:.2}", record.label(), record.price);
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │ Journal UI / CLI │
//! └────────┬─────────┘
//!          │ search / lookup / refresh / status
//!          ▼
//! ┌──────────────────┐     ┌──────────────────┐
//! │ ReferenceData-   │────▶│ CircuitBreaker   │
//! │ Service          │     └──────────────────┘
//! └────────┬─────────┘
//!          │ fetch → parse → validate → index → publish
//!          ▼
//! ┌──────────────────┐     ┌──────────────────┐
//! │ HttpClient       │     │ Fallback table   │
//! │ (reqwest/stub)   │     │ (embedded)       │
//! └──────────────────┘     └──────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! The load pipeline never surfaces an error to callers. Failures are
//! tagged with a structured [`FeedError`] cause, logged via `tracing`, and
//! answered from the fallback dataset; callers observe the substitution
//! only through [`ReferenceDataService::is_using_fallback`] and friends.

pub mod breaker;
pub mod config;
pub mod domain;
pub mod error;
pub mod fallback;
pub mod feed;
pub mod http_client;
pub mod search;
pub mod service;

// Re-export commonly used types at crate root for convenience

pub use breaker::{BreakerConfig, BreakerState, CircuitBreaker};
pub use config::ServiceConfig;
pub use domain::{DataOrigin, Dataset, StockRecord, Symbol};
pub use error::{ColumnRole, FeedError, ValidationError};
pub use fallback::fallback_records;
pub use feed::parse_feed;
pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, NoopHttpClient, ReqwestHttpClient};
pub use search::SearchIndex;
pub use service::{ReferenceDataService, ServiceStatus};
