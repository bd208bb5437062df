//! Lambda serving `GET /customers/{customerId}`.

use customers_api::common::bootstrap;
use customers_api::common::errors::Error;
use customers_api::handlers::get_customer::process_request;
use lambda_http::{run, service_fn, Error as LambdaError, Request as LambdaRequest};

#[tokio::main]
async fn main() -> Result<(), LambdaError> {
    let store = bootstrap().await;

    run(service_fn(|request: LambdaRequest| {
        let store = store.clone();
        async move { process_request(request, store).await.or_else(Error::into_response) }
    }))
    .await
}
