use lambda_http::http::header::LOCATION;
use lambda_http::http::StatusCode;
use lambda_http::{Body, Request, Response};
use tracing::info;

use crate::common::customer::{customer_name, to_stored, NameError, Record};
use crate::common::errors::{ApiErrorCode, Error};
use crate::common::store::CustomerStore;
use crate::common::utils::{client_error, customer_location, internal_error, request_payload};

const MALFORMED_INPUT_ERROR: &str = "Malformed input";
const NAME_REQUIRED_ERROR: &str = "`name` is required";
const NAME_NOT_STRING_ERROR: &str = "`name` must be a string";

fn parse_customer(request: &Request) -> Result<Record, Error> {
    let payload = request_payload(request).ok_or_else(|| {
        info!("Request payload is empty");
        client_error(ApiErrorCode::MalformedInput, MALFORMED_INPUT_ERROR)
    })?;

    serde_json::from_slice::<Record>(payload).map_err(|err| {
        info!("Request payload is not a JSON object: {}", err);
        client_error(ApiErrorCode::MalformedInput, MALFORMED_INPUT_ERROR)
    })
}

/// Creates the customer, replacing any existing customer with the same name.
#[tracing::instrument(skip_all)]
pub async fn process_request<S: CustomerStore>(
    request: Request,
    store: S,
) -> Result<Response<Body>, Error> {
    let customer = parse_customer(&request)?;

    let name = match customer_name(&customer) {
        Ok(name) => name.to_string(),
        Err(NameError::Missing) => {
            return Err(client_error(ApiErrorCode::MissingInput, NAME_REQUIRED_ERROR))
        }
        Err(NameError::NotAString) => {
            return Err(client_error(ApiErrorCode::MalformedInput, NAME_NOT_STRING_ERROR))
        }
    };

    info!("Storing customer {}", name);
    store.put(to_stored(customer)).await.map_err(internal_error)?;

    let response = Response::builder()
        .status(StatusCode::CREATED)
        .header(LOCATION, customer_location(&name))
        .body(Body::Empty)?;

    Ok(response)
}
