//! Embedded dataset used whenever the feed cannot be loaded.
//!
//! A representative slice of large-cap NSE names; prices are indicative
//! snapshots, good enough for the journal UI to stay usable offline.

use crate::{StockRecord, Symbol};

const FALLBACK_TABLE: &[(&str, &str, f64)] = &[
    ("RELIANCE", "Reliance Industries Ltd", 2945.60),
    ("TCS", "Tata Consultancy Services Ltd", 3872.20),
    ("HDFCBANK", "HDFC Bank Ltd", 1712.45),
    ("INFY", "Infosys Ltd", 1598.70),
    ("ICICIBANK", "ICICI Bank Ltd", 1189.30),
    ("HINDUNILVR", "Hindustan Unilever Ltd", 2384.15),
    ("ITC", "ITC Ltd", 465.80),
    ("SBIN", "State Bank of India", 829.50),
    ("BHARTIARTL", "Bharti Airtel Ltd", 1545.90),
    ("KOTAKBANK", "Kotak Mahindra Bank Ltd", 1768.25),
    ("LT", "Larsen & Toubro Ltd", 3610.40),
    ("AXISBANK", "Axis Bank Ltd", 1152.85),
    ("ASIANPAINT", "Asian Paints Ltd", 2891.70),
    ("MARUTI", "Maruti Suzuki India Ltd", 12385.00),
    ("WIPRO", "Wipro Ltd", 542.35),
    ("M&M", "Mahindra & Mahindra Ltd", 2932.10),
    ("BAJFINANCE", "Bajaj Finance Ltd", 6894.55),
    ("TITAN", "Titan Company Ltd", 3421.95),
    ("SUNPHARMA", "Sun Pharmaceutical Industries Ltd", 1804.60),
    ("TATAMOTORS", "Tata Motors Ltd", 1021.75),
];

/// Materialize the embedded table into validated records.
pub fn fallback_records() -> Vec<StockRecord> {
    FALLBACK_TABLE
        .iter()
        .filter_map(|(symbol, name, price)| {
            let symbol = Symbol::parse(symbol).ok()?;
            StockRecord::new(symbol, *name, *price).ok()
        })
        .collect()
}
