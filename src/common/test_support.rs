//! In-memory table double and request/response helpers shared by handler tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use lambda_http::{Body, Request, RequestExt, Response};
use serde_json::Value;

use crate::common::customer::{Record, PRIMARY_KEY};
use crate::common::errors::{Error, StoreError};
use crate::common::store::{CustomerStore, ScanOutput};
use crate::common::PATH_PARAMETER;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum StoreCall {
    Get(String),
    Scan,
    Put(Record),
    Delete(String),
}

#[derive(Debug, Default)]
pub(crate) struct StoreState {
    pub records: Vec<Record>,
    pub calls: Vec<StoreCall>,
    pub releases: usize,
}

/// Records every call and counts how many times a handle is dropped.
pub(crate) struct RecordingStore {
    state: Arc<Mutex<StoreState>>,
    failing: bool,
}

impl RecordingStore {
    pub fn with_records(records: Vec<Record>) -> (Self, Arc<Mutex<StoreState>>) {
        let state = Arc::new(Mutex::new(StoreState {
            records,
            ..Default::default()
        }));
        let store = Self {
            state: state.clone(),
            failing: false,
        };

        (store, state)
    }

    pub fn failing() -> (Self, Arc<Mutex<StoreState>>) {
        let (mut store, state) = Self::with_records(Vec::new());
        store.failing = true;
        (store, state)
    }

    fn record_call(&self, call: StoreCall) -> Result<(), StoreError> {
        self.state.lock().unwrap().calls.push(call);
        if self.failing {
            return Err(StoreError::UnsupportedAttribute("simulated failure".into()));
        }
        Ok(())
    }
}

impl Drop for RecordingStore {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.lock() {
            state.releases += 1;
        }
    }
}

fn key_of(record: &Record) -> Option<&str> {
    record.get(PRIMARY_KEY).and_then(Value::as_str)
}

#[async_trait]
impl CustomerStore for RecordingStore {
    async fn get(&self, key: &str) -> Result<Option<Record>, StoreError> {
        self.record_call(StoreCall::Get(key.to_string()))?;
        let state = self.state.lock().unwrap();
        Ok(state
            .records
            .iter()
            .find(|record| key_of(record) == Some(key))
            .cloned())
    }

    async fn scan(&self) -> Result<ScanOutput, StoreError> {
        self.record_call(StoreCall::Scan)?;
        let state = self.state.lock().unwrap();
        Ok(ScanOutput {
            count: state.records.len(),
            records: state.records.clone(),
        })
    }

    async fn put(&self, record: Record) -> Result<(), StoreError> {
        self.record_call(StoreCall::Put(record.clone()))?;
        let mut state = self.state.lock().unwrap();
        let key = key_of(&record).map(str::to_string);
        state.records.retain(|existing| key_of(existing) != key.as_deref());
        state.records.push(record);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.record_call(StoreCall::Delete(key.to_string()))?;
        let mut state = self.state.lock().unwrap();
        state.records.retain(|existing| key_of(existing) != Some(key));
        Ok(())
    }
}

pub(crate) fn record(value: Value) -> Record {
    value.as_object().cloned().expect("record must be a JSON object")
}

pub(crate) fn request_with_id(id: &str, body: Body) -> Request {
    Request::new(body).with_path_parameters(HashMap::from([(
        PATH_PARAMETER.to_string(),
        id.to_string(),
    )]))
}

pub(crate) fn body_json(response: &Response<Body>) -> Value {
    serde_json::from_slice(response.body().as_ref()).expect("response body must be JSON")
}

/// The response a handler would hand back to the gateway.
pub(crate) fn returned(result: Result<Response<Body>, Error>) -> Response<Body> {
    match result {
        Ok(response) | Err(Error::HttpError(response)) => response,
        Err(Error::LambdaError(err)) => panic!("unexpected lambda error: {err}"),
    }
}
