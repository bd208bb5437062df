use lambda_http::{http, Body, Error as LambdaError, Response};
use serde::Serialize;

/// Outcome of a handler that did not produce a success response.
///
/// `HttpError` carries a response that is already fit to return to the caller
/// (client input errors, storage failures). `LambdaError` is a failure of the
/// function itself and is reported to the runtime.
#[derive(Debug)]
pub enum Error {
    HttpError(Response<Body>),
    LambdaError(LambdaError),
}

impl Error {
    pub fn into_response(self) -> Result<Response<Body>, LambdaError> {
        match self {
            Error::HttpError(val) => Ok(val),
            Error::LambdaError(err) => Err(err),
        }
    }
}

impl From<LambdaError> for Error {
    fn from(value: LambdaError) -> Self {
        Self::LambdaError(value)
    }
}

impl From<http::Error> for Error {
    fn from(value: http::Error) -> Self {
        Self::LambdaError(Box::new(value))
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::LambdaError(Box::new(value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ApiErrorCode {
    MalformedInput,
    MissingInput,
    MissingPathParameter,
    InternalServerError,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<ApiErrorCode>,
    #[serde(rename = "errorMessage", skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl ErrorBody {
    pub fn new(code: ApiErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            error_message: Some(message.into()),
        }
    }

    pub fn code(code: ApiErrorCode) -> Self {
        Self {
            code: Some(code),
            error_message: None,
        }
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self {
            code: None,
            error_message: Some(message.into()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("dynamodb request failed: {0}")]
    Sdk(#[from] aws_sdk_dynamodb::Error),
    #[error("attribute `{0}` has no JSON representation")]
    UnsupportedAttribute(String),
    #[error("attribute `{field}` holds an invalid number `{value}`")]
    InvalidNumber { field: String, value: String },
}
