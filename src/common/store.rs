use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::{Number, Value};
use tracing::info;

use crate::common::customer::{Record, PRIMARY_KEY};
use crate::common::errors::StoreError;

pub type Item = HashMap<String, AttributeValue>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanOutput {
    pub count: usize,
    pub records: Vec<Record>,
}

/// The customer table, keyed by [`PRIMARY_KEY`].
#[async_trait]
pub trait CustomerStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Record>, StoreError>;

    /// Every record in the table, in the order the table returns them.
    async fn scan(&self) -> Result<ScanOutput, StoreError>;

    /// Creates the record or replaces an existing one with the same key.
    async fn put(&self, record: Record) -> Result<(), StoreError>;

    /// Removes the record if present. A missing record is not an error.
    async fn delete(&self, key: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Clone)]
pub struct DynamoCustomerStore {
    client: aws_sdk_dynamodb::Client,
    table_name: String,
}

impl DynamoCustomerStore {
    pub fn new(client: aws_sdk_dynamodb::Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl CustomerStore for DynamoCustomerStore {
    async fn get(&self, key: &str) -> Result<Option<Record>, StoreError> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(PRIMARY_KEY, AttributeValue::S(key.to_string()))
            .send()
            .await
            .map_err(aws_sdk_dynamodb::Error::from)?;

        output.item.map(from_item).transpose()
    }

    async fn scan(&self) -> Result<ScanOutput, StoreError> {
        let mut scanned = ScanOutput::default();
        let mut start_key = None;

        loop {
            let output = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(aws_sdk_dynamodb::Error::from)?;

            scanned.count += usize::try_from(output.count).unwrap_or_default();
            for item in output.items.unwrap_or_default() {
                scanned.records.push(from_item(item)?);
            }

            match output.last_evaluated_key {
                Some(key) if !key.is_empty() => {
                    info!("Scan continues after {} records", scanned.count);
                    start_key = Some(key);
                }
                _ => break,
            }
        }

        Ok(scanned)
    }

    async fn put(&self, record: Record) -> Result<(), StoreError> {
        let output = self
            .client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(to_item(record)))
            .send()
            .await
            .map_err(aws_sdk_dynamodb::Error::from)?;

        info!("Put item: {:?}", output);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(PRIMARY_KEY, AttributeValue::S(key.to_string()))
            .send()
            .await
            .map_err(aws_sdk_dynamodb::Error::from)?;

        Ok(())
    }
}

pub fn to_item(record: Record) -> Item {
    record
        .into_iter()
        .map(|(field, value)| (field, to_attribute_value(value)))
        .collect()
}

pub fn from_item(item: Item) -> Result<Record, StoreError> {
    item.into_iter()
        .map(|(field, value)| {
            let value = from_attribute_value(&field, value)?;
            Ok::<_, StoreError>((field, value))
        })
        .collect()
}

fn to_attribute_value(value: Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(val) => AttributeValue::Bool(val),
        Value::Number(val) => AttributeValue::N(val.to_string()),
        Value::String(val) => AttributeValue::S(val),
        Value::Array(values) => {
            AttributeValue::L(values.into_iter().map(to_attribute_value).collect())
        }
        Value::Object(fields) => AttributeValue::M(
            fields
                .into_iter()
                .map(|(field, value)| (field, to_attribute_value(value)))
                .collect(),
        ),
    }
}

fn from_attribute_value(field: &str, value: AttributeValue) -> Result<Value, StoreError> {
    let value = match value {
        AttributeValue::S(val) => Value::String(val),
        AttributeValue::N(val) => Value::Number(parse_number(field, val)?),
        AttributeValue::Bool(val) => Value::Bool(val),
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::L(values) => Value::Array(
            values
                .into_iter()
                .map(|value| from_attribute_value(field, value))
                .collect::<Result<_, _>>()?,
        ),
        AttributeValue::M(fields) => Value::Object(from_item(fields)?),
        AttributeValue::Ss(values) => Value::Array(values.into_iter().map(Value::String).collect()),
        AttributeValue::Ns(values) => Value::Array(
            values
                .into_iter()
                .map(|val| parse_number(field, val).map(Value::Number))
                .collect::<Result<_, _>>()?,
        ),
        _ => return Err(StoreError::UnsupportedAttribute(field.to_string())),
    };

    Ok(value)
}

fn parse_number(field: &str, value: String) -> Result<Number, StoreError> {
    match value.parse::<Number>() {
        Ok(number) => Ok(number),
        Err(_) => Err(StoreError::InvalidNumber {
            field: field.to_string(),
            value,
        }),
    }
}
