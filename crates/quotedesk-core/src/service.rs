//! The reference data service façade.
//!
//! Owns the lifecycle of the symbol dataset: fetch, parse, validate, index,
//! publish. Construction seeds the embedded fallback table so every query
//! is answerable without I/O; each load attempt replaces the snapshot
//! wholesale, never row by row. Nothing in the load pipeline surfaces an
//! error to callers: failures are logged with their structured cause and
//! answered from the fallback table.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use std::time::Instant;

use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use tracing::{info, warn};

use crate::breaker::CircuitBreaker;
use crate::config::ServiceConfig;
use crate::error::FeedError;
use crate::fallback::fallback_records;
use crate::feed::{looks_like_html, parse_feed};
use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient};
use crate::{DataOrigin, Dataset, StockRecord};

/// Serializable snapshot of service state for status indicators.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceStatus {
    pub loaded: bool,
    pub loading: bool,
    pub origin: DataOrigin,
    pub record_count: usize,
    pub loaded_at: String,
}

/// Market reference data service.
///
/// One instance per process is typical, but nothing here is global state:
/// tests construct independent instances with stub transports.
pub struct ReferenceDataService {
    config: ServiceConfig,
    http: Arc<dyn HttpClient>,
    breaker: CircuitBreaker,
    dataset: RwLock<Arc<Dataset>>,
    load_gate: tokio::sync::Mutex<()>,
    loading: AtomicBool,
    completed_loads: AtomicU64,
    last_load: Mutex<Option<Instant>>,
}

impl ReferenceDataService {
    pub fn new(config: ServiceConfig, http: Arc<dyn HttpClient>) -> Self {
        let breaker = CircuitBreaker::new(config.breaker);
        let seed = Dataset::new(fallback_records(), DataOrigin::Fallback);
        Self {
            config,
            http,
            breaker,
            dataset: RwLock::new(Arc::new(seed)),
            load_gate: tokio::sync::Mutex::new(()),
            loading: AtomicBool::new(false),
            completed_loads: AtomicU64::new(0),
            last_load: Mutex::new(None),
        }
    }

    /// Production instance: env-aware config over a reqwest transport.
    pub fn from_env() -> Self {
        Self::new(ServiceConfig::from_env(), Arc::new(ReqwestHttpClient::new()))
    }

    /// Refresh the dataset if it is missing or stale. Idempotent; concurrent
    /// callers share one in-flight load.
    pub async fn ensure_loaded(&self) {
        self.load(false).await;
    }

    /// Unconditionally repeat the load sequence, bypassing the freshness
    /// short-circuit. Still single-flight deduplicated.
    pub async fn force_refresh(&self) {
        self.load(true).await;
    }

    /// Ranked fuzzy search over the current snapshot.
    ///
    /// Queries shorter than the configured minimum return an empty vec
    /// rather than an error.
    pub async fn search(&self, query: &str, limit: usize) -> Vec<StockRecord> {
        self.ensure_loaded().await;
        let trimmed = query.trim();
        if trimmed.chars().count() < self.config.min_query_len {
            return Vec::new();
        }
        let snapshot = self.snapshot();
        snapshot
            .index()
            .query(trimmed, limit)
            .into_iter()
            .map(|index| snapshot.records()[index].clone())
            .collect()
    }

    /// Exact lookup on the uppercase-trimmed symbol; first match wins when
    /// the feed carries duplicates.
    pub async fn lookup_by_symbol(&self, symbol: &str) -> Option<StockRecord> {
        self.ensure_loaded().await;
        self.snapshot().find_by_symbol(symbol).cloned()
    }

    /// Whether at least one load attempt has completed since construction.
    pub fn is_loaded(&self) -> bool {
        self.completed_loads.load(Ordering::Acquire) > 0
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    pub fn is_using_fallback(&self) -> bool {
        self.snapshot().origin() == DataOrigin::Fallback
    }

    pub fn record_count(&self) -> usize {
        self.snapshot().len()
    }

    pub fn status(&self) -> ServiceStatus {
        let snapshot = self.snapshot();
        ServiceStatus {
            loaded: self.is_loaded(),
            loading: self.is_loading(),
            origin: snapshot.origin(),
            record_count: snapshot.len(),
            loaded_at: snapshot
                .loaded_at()
                .format(&Rfc3339)
                .unwrap_or_default(),
        }
    }

    fn snapshot(&self) -> Arc<Dataset> {
        Arc::clone(&self.dataset.read().expect("dataset lock is not poisoned"))
    }

    fn install(&self, dataset: Dataset) {
        *self.dataset.write().expect("dataset lock is not poisoned") = Arc::new(dataset);
    }

    fn is_fresh(&self) -> bool {
        self.last_load
            .lock()
            .expect("freshness lock is not poisoned")
            .map(|at| at.elapsed() < self.config.staleness_window)
            .unwrap_or(false)
    }

    async fn load(&self, force: bool) {
        if !force && self.is_fresh() {
            return;
        }

        let observed = self.completed_loads.load(Ordering::Acquire);
        let _gate = self.load_gate.lock().await;

        // The load this caller queued behind has completed; its result is
        // the one we were waiting for.
        if self.completed_loads.load(Ordering::Acquire) != observed {
            return;
        }
        if !force && self.is_fresh() {
            return;
        }

        self.loading.store(true, Ordering::Release);
        match self.fetch_and_parse().await {
            Ok(records) => {
                let count = records.len();
                self.install(Dataset::new(records, DataOrigin::Remote));
                self.breaker.on_success();
                info!(records = count, "reference dataset refreshed from feed");
            }
            Err(error) => {
                if error != FeedError::Cooldown {
                    self.breaker.on_failure();
                }
                warn!(
                    code = error.code(),
                    %error,
                    "feed load failed; serving fallback dataset"
                );
                self.install(Dataset::new(fallback_records(), DataOrigin::Fallback));
            }
        }
        *self
            .last_load
            .lock()
            .expect("freshness lock is not poisoned") = Some(Instant::now());
        self.completed_loads.fetch_add(1, Ordering::AcqRel);
        self.loading.store(false, Ordering::Release);
    }

    async fn fetch_and_parse(&self) -> Result<Vec<StockRecord>, FeedError> {
        if !self.breaker.should_attempt() {
            return Err(FeedError::Cooldown);
        }

        let timeout_ms = self.config.fetch_timeout.as_millis() as u64;
        let request = HttpRequest::get(self.config.request_url())
            .with_header("accept", "text/csv, text/plain")
            .with_timeout_ms(timeout_ms);

        // The transport enforces its own budget; the outer timeout bounds
        // transports that ignore it.
        let response = tokio::time::timeout(self.config.fetch_timeout, self.http.execute(request))
            .await
            .map_err(|_| FeedError::Timeout(timeout_ms))?
            .map_err(|error| {
                if error.timed_out() {
                    FeedError::Timeout(timeout_ms)
                } else {
                    FeedError::Transport(error.message().to_owned())
                }
            })?;

        if !response.is_success() {
            return Err(FeedError::Status(response.status));
        }
        if looks_like_html(&response.body) {
            return Err(FeedError::HtmlBody);
        }
        parse_feed(&response.body)
    }
}
