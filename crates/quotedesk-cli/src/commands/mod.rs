mod lookup;
mod refresh;
mod search;
mod status;

use std::sync::Arc;
use std::time::Duration;

use quotedesk_core::{ReferenceDataService, ReqwestHttpClient, ServiceConfig};
use serde_json::Value;

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub async fn run(cli: &Cli) -> Result<Value, CliError> {
    let config = ServiceConfig::from_env()
        .with_fetch_timeout(Duration::from_millis(cli.timeout_ms));
    let service = ReferenceDataService::new(config, Arc::new(ReqwestHttpClient::new()));

    match &cli.command {
        Command::Search(args) => search::run(args, &service).await,
        Command::Lookup(args) => lookup::run(args, &service).await,
        Command::Refresh => refresh::run(&service).await,
        Command::Status => status::run(&service).await,
    }
}
