use lambda_http::http::StatusCode;
use lambda_http::{Body, Request, Response};
use tracing::info;

use crate::common::customer::to_public;
use crate::common::errors::{Error, ErrorBody};
use crate::common::store::CustomerStore;
use crate::common::utils::{internal_error, json_response, path_identifier};

const ITEM_NOT_FOUND_ERROR: &str = "Item not found";

#[tracing::instrument(skip_all)]
pub async fn process_request<S: CustomerStore>(
    request: Request,
    store: S,
) -> Result<Response<Body>, Error> {
    let customer_id = path_identifier(&request)?;

    info!("Fetching customer {}", customer_id);
    let record = store.get(&customer_id).await.map_err(internal_error)?;

    match record {
        Some(record) => json_response(StatusCode::OK, &to_public(record)),
        None => {
            info!("Customer {} not found", customer_id);
            json_response(StatusCode::NOT_FOUND, &ErrorBody::message(ITEM_NOT_FOUND_ERROR))
        }
    }
}
