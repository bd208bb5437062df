use lambda_http::http::header::CONTENT_TYPE;
use lambda_http::http::StatusCode;
use lambda_http::{Body, Request, RequestExt, Response};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;
use tracing::{error, info};

use crate::common::errors::{ApiErrorCode, Error, ErrorBody, StoreError};
use crate::common::{PATH_PARAMETER, RESOURCE_PATH};

const MISSING_PATH_PARAMETER_ERROR: &str = "`customerId` is required";

// Characters left unescaped in a single URI component.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Customer identifier from the request path.
pub fn path_identifier(request: &Request) -> Result<String, Error> {
    let identifier = request
        .path_parameters_ref()
        .and_then(|params| params.first(PATH_PARAMETER))
        .filter(|identifier| !identifier.is_empty());

    match identifier {
        Some(identifier) => Ok(identifier.to_string()),
        None => {
            info!("Request has no {} path parameter", PATH_PARAMETER);
            Err(client_error(
                ApiErrorCode::MissingPathParameter,
                MISSING_PATH_PARAMETER_ERROR,
            ))
        }
    }
}

/// Raw request body, or `None` when the request carries none.
///
/// The gateway adapter has already decoded bodies flagged `isBase64Encoded`
/// into [`Body::Binary`], so text and binary bodies are read the same way.
pub fn request_payload(request: &Request) -> Option<&[u8]> {
    let payload: &[u8] = match request.body() {
        Body::Empty => return None,
        Body::Text(text) => text.as_bytes(),
        Body::Binary(bytes) => bytes.as_slice(),
    };

    (!payload.is_empty()).then_some(payload)
}

pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Result<Response<Body>, Error> {
    let response = Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::Text(serde_json::to_string(body)?))?;

    Ok(response)
}

pub fn empty_response(status: StatusCode) -> Result<Response<Body>, Error> {
    Ok(Response::builder().status(status).body(Body::Empty)?)
}

/// 400 response for input rejected before any storage call.
pub fn client_error(code: ApiErrorCode, message: &str) -> Error {
    match json_response(StatusCode::BAD_REQUEST, &ErrorBody::new(code, message)) {
        Ok(response) => Error::HttpError(response),
        Err(err) => err,
    }
}

/// 500 response for a failed storage call. The cause is logged, never returned.
pub fn internal_error(err: StoreError) -> Error {
    error!("Storage call failed: {}", err);

    let body = ErrorBody::code(ApiErrorCode::InternalServerError);
    match json_response(StatusCode::INTERNAL_SERVER_ERROR, &body) {
        Ok(response) => Error::HttpError(response),
        Err(err) => err,
    }
}

/// Path of the customer resource, with the identifier escaped as a URI component.
pub fn customer_location(name: &str) -> String {
    format!("{}/{}", RESOURCE_PATH, utf8_percent_encode(name, URI_COMPONENT))
}
