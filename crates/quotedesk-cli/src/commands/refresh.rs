use quotedesk_core::ReferenceDataService;
use serde_json::Value;

use crate::error::CliError;

pub async fn run(service: &ReferenceDataService) -> Result<Value, CliError> {
    service.force_refresh().await;
    Ok(serde_json::to_value(service.status())?)
}
