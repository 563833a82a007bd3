use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Breaker position for the upstream feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakerState {
    Closed,
    Open,
    HalfOpen,
}

/// Thresholds for suppressing feed fetches after repeated failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakerConfig {
    /// Consecutive failures before the breaker opens.
    pub trip_threshold: u32,
    /// How long fetches stay suppressed once open.
    pub retry_after: Duration,
}

impl Default for BreakerConfig {
    fn default() -> Self {
        Self {
            trip_threshold: 3,
            retry_after: Duration::from_secs(60),
        }
    }
}

#[derive(Debug)]
struct BreakerInner {
    state: BreakerState,
    failure_streak: u32,
    opened_at: Option<Instant>,
}

/// Tracks consecutive feed failures so the load path can skip the network
/// entirely while the upstream is known-bad. While open, loads are served
/// straight from the fallback table; the first attempt after `retry_after`
/// is a half-open probe.
#[derive(Debug)]
pub struct CircuitBreaker {
    config: BreakerConfig,
    inner: Mutex<BreakerInner>,
}

impl CircuitBreaker {
    pub fn new(config: BreakerConfig) -> Self {
        Self {
            config,
            inner: Mutex::new(BreakerInner {
                state: BreakerState::Closed,
                failure_streak: 0,
                opened_at: None,
            }),
        }
    }

    /// Whether the load path may hit the network right now. An open breaker
    /// whose cooldown has elapsed transitions to half-open and admits one
    /// probe attempt.
    pub fn should_attempt(&self) -> bool {
        let mut inner = self.inner.lock().expect("breaker lock is not poisoned");
        match inner.state {
            BreakerState::Closed | BreakerState::HalfOpen => true,
            BreakerState::Open => {
                let cooled_down = inner
                    .opened_at
                    .map(|at| at.elapsed() >= self.config.retry_after)
                    .unwrap_or(false);
                if cooled_down {
                    inner.state = BreakerState::HalfOpen;
                    inner.opened_at = None;
                    true
                } else {
                    false
                }
            }
        }
    }

    pub fn on_success(&self) {
        let mut inner = self.inner.lock().expect("breaker lock is not poisoned");
        inner.state = BreakerState::Closed;
        inner.failure_streak = 0;
        inner.opened_at = None;
    }

    pub fn on_failure(&self) {
        let mut inner = self.inner.lock().expect("breaker lock is not poisoned");
        inner.failure_streak = inner.failure_streak.saturating_add(1);
        let probe_failed = inner.state == BreakerState::HalfOpen;
        if probe_failed || inner.failure_streak >= self.config.trip_threshold {
            inner.state = BreakerState::Open;
            inner.opened_at = Some(Instant::now());
        }
    }

    pub fn state(&self) -> BreakerState {
        self.inner
            .lock()
            .expect("breaker lock is not poisoned")
            .state
    }
}

impl Default for CircuitBreaker {
    fn default() -> Self {
        Self::new(BreakerConfig::default())
    }
}
