use lambda_http::http::StatusCode;
use lambda_http::{Body, Request, Response};
use tracing::info;

use crate::common::errors::Error;
use crate::common::store::CustomerStore;
use crate::common::utils::{empty_response, internal_error, path_identifier};

#[tracing::instrument(skip_all)]
pub async fn process_request<S: CustomerStore>(
    request: Request,
    store: S,
) -> Result<Response<Body>, Error> {
    let customer_id = path_identifier(&request)?;

    info!("Deleting customer {}", customer_id);
    // Same outcome whether or not the customer existed.
    store.delete(&customer_id).await.map_err(internal_error)?;

    empty_response(StatusCode::NO_CONTENT)
}
