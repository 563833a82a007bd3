use quotedesk_core::{ReferenceDataService, StockRecord, Symbol};
use serde::Serialize;
use serde_json::Value;

use crate::cli::LookupArgs;
use crate::error::CliError;

#[derive(Debug, Serialize)]
struct LookupResponseData {
    symbol: String,
    found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    record: Option<StockRecord>,
    using_fallback: bool,
}

pub async fn run(args: &LookupArgs, service: &ReferenceDataService) -> Result<Value, CliError> {
    let symbol = Symbol::parse(&args.symbol)?;

    let record = service.lookup_by_symbol(symbol.as_str()).await;
    let data = serde_json::to_value(LookupResponseData {
        symbol: symbol.as_str().to_owned(),
        found: record.is_some(),
        record,
        using_fallback: service.is_using_fallback(),
    })?;

    Ok(data)
}
