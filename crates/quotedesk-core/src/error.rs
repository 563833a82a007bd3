use std::fmt::{Display, Formatter};

use thiserror::Error;

/// Validation errors raised when constructing domain values.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("name cannot be empty")]
    EmptyName,
    #[error("price must be finite: {value}")]
    NonFinitePrice { value: f64 },
    #[error("price must be positive: {value}")]
    NonPositivePrice { value: f64 },
}

/// Feed column roles located in the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    Name,
    Symbol,
    Price,
}

impl ColumnRole {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Symbol => "symbol",
            Self::Price => "price",
        }
    }
}

impl Display for ColumnRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured cause of a failed feed load.
///
/// Every distinct failure is tagged rather than collapsed into one branch,
/// so the fallback path can log what actually went wrong. None of these
/// variants ever reach callers of the service: the load pipeline absorbs
/// them and substitutes the embedded dataset.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FeedError {
    #[error("feed transport failed: {0}")]
    Transport(String),
    #[error("feed fetch exceeded the {0} ms budget")]
    Timeout(u64),
    #[error("feed returned HTTP status {0}")]
    Status(u16),
    #[error("feed returned an HTML document instead of delimited text")]
    HtmlBody,
    #[error("feed has no data rows")]
    Truncated,
    #[error("feed header has no recognizable {0} column")]
    MissingColumn(ColumnRole),
    #[error("feed parsed to zero valid rows")]
    NoValidRows,
    #[error("feed refresh suppressed while the upstream cools down")]
    Cooldown,
}

impl FeedError {
    /// Stable machine-readable code used as a structured log field.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Transport(_) => "feed.transport",
            Self::Timeout(_) => "feed.timeout",
            Self::Status(_) => "feed.status",
            Self::HtmlBody => "feed.html_body",
            Self::Truncated => "feed.truncated",
            Self::MissingColumn(_) => "feed.missing_column",
            Self::NoValidRows => "feed.no_valid_rows",
            Self::Cooldown => "feed.cooldown",
        }
    }
}
