use quotedesk_core::{ReferenceDataService, StockRecord};
use serde::Serialize;
use serde_json::Value;

use crate::cli::SearchArgs;
use crate::error::CliError;

#[derive(Debug, Serialize)]
struct SearchResponseData {
    query: String,
    results: Vec<StockRecord>,
    using_fallback: bool,
}

pub async fn run(args: &SearchArgs, service: &ReferenceDataService) -> Result<Value, CliError> {
    if args.limit == 0 {
        return Err(CliError::Command(String::from(
            "--limit must be greater than zero",
        )));
    }

    let results = service.search(&args.query, args.limit).await;
    let data = serde_json::to_value(SearchResponseData {
        query: args.query.trim().to_owned(),
        results,
        using_fallback: service.is_using_fallback(),
    })?;

    Ok(data)
}
