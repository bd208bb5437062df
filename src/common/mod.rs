use aws_config::BehaviorVersion;

pub mod config;
pub mod customer;
pub mod errors;
pub mod store;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

use crate::common::config::Config;
use crate::common::store::DynamoCustomerStore;

/// Path parameter carrying the customer identifier.
pub const PATH_PARAMETER: &str = "customerId";
/// Prefix of the resource URL handed back in `Location`.
pub const RESOURCE_PATH: &str = "/customers";

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .without_time() // CloudWatch will add the ingestion time
        .with_target(false)
        .init();
}

/// Shared startup for every customer lambda: logging, configuration and the
/// DynamoDB client, built once per cold start.
pub async fn bootstrap() -> DynamoCustomerStore {
    init_tracing();

    let config = Config::from_env();
    tracing::info!("Using customer table {}", config.table_name);

    let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let dynamo_client = aws_sdk_dynamodb::Client::new(&aws_config);

    DynamoCustomerStore::new(dynamo_client, config.table_name)
}
