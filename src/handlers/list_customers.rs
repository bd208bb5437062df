use lambda_http::http::StatusCode;
use lambda_http::{Body, Request, Response};
use serde::Serialize;
use tracing::info;

use crate::common::customer::{to_public, Record};
use crate::common::errors::Error;
use crate::common::store::CustomerStore;
use crate::common::utils::{internal_error, json_response};

#[derive(Debug, Serialize)]
struct ListResponse {
    total: usize,
    items: Vec<Record>,
}

#[tracing::instrument(skip_all)]
pub async fn process_request<S: CustomerStore>(
    _request: Request,
    store: S,
) -> Result<Response<Body>, Error> {
    let scanned = store.scan().await.map_err(internal_error)?;
    info!("Scanned {} customers", scanned.count);

    let response = ListResponse {
        total: scanned.count,
        items: scanned.records.into_iter().map(to_public).collect(),
    };

    json_response(StatusCode::OK, &response)
}
