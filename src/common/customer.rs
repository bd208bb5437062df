use serde_json::{Map, Value};

/// Field holding the customer identifier in the table.
pub const PRIMARY_KEY: &str = "primary_key";
/// Field holding the customer identifier in request and response bodies.
pub const NAME: &str = "name";

/// A flat customer document, in field order.
pub type Record = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameError {
    Missing,
    NotAString,
}

/// Identifier of a customer as submitted by a client.
///
/// Falsy values (`null`, `false`, `0`, the empty string) count as missing.
pub fn customer_name(customer: &Record) -> Result<&str, NameError> {
    match customer.get(NAME) {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Err(NameError::Missing),
        Some(Value::Number(number)) if number.as_f64() == Some(0.0) => Err(NameError::Missing),
        Some(Value::String(name)) if name.is_empty() => Err(NameError::Missing),
        Some(Value::String(name)) => Ok(name.as_str()),
        Some(_) => Err(NameError::NotAString),
    }
}

/// Request body shape to table shape.
pub fn to_stored(customer: Record) -> Record {
    rename_key(customer, NAME, PRIMARY_KEY)
}

/// Table shape to response body shape.
pub fn to_public(record: Record) -> Record {
    rename_key(record, PRIMARY_KEY, NAME)
}

/// Moves the value under `from` to `to`, placed first. Every other field keeps
/// its value and relative order. A stray `to` field is shadowed by the renamed
/// key.
fn rename_key(record: Record, from: &str, to: &str) -> Record {
    let mut key = None;
    let mut rest = Vec::with_capacity(record.len());
    for (field, value) in record {
        if field == from {
            key = Some(value);
        } else {
            rest.push((field, value));
        }
    }

    let mut renamed = Record::new();
    let has_key = key.is_some();
    if let Some(value) = key {
        renamed.insert(to.to_string(), value);
    }
    for (field, value) in rest {
        if has_key && field == to {
            continue;
        }
        renamed.insert(field, value);
    }

    renamed
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn stored_shape_uses_primary_key() {
        let stored = to_stored(record(json!({
            "name": "New Customer",
            "email": "new@example.com",
        })));

        assert_eq!(
            Value::Object(stored),
            json!({ "primary_key": "New Customer", "email": "new@example.com" })
        );
    }

    #[test]
    fn public_shape_puts_name_first() {
        let public = to_public(record(json!({
            "email": "existing@example.com",
            "primary_key": "Existing Customer",
            "vip": true,
        })));

        let fields: Vec<&str> = public.keys().map(String::as_str).collect();
        assert_eq!(fields, vec!["name", "email", "vip"]);
        assert_eq!(public[NAME], json!("Existing Customer"));
    }

    #[test]
    fn renaming_round_trips() {
        let customer = record(json!({ "name": "Customer 1", "age": 42 }));
        assert_eq!(to_public(to_stored(customer.clone())), customer);
    }

    #[test]
    fn renamed_key_shadows_existing_field() {
        let public = to_public(record(json!({
            "primary_key": "Customer 1",
            "name": "stale",
        })));

        assert_eq!(Value::Object(public), json!({ "name": "Customer 1" }));
    }

    #[test]
    fn record_without_key_is_left_alone() {
        let untouched = record(json!({ "email": "a@example.com", "name": "kept" }));
        assert_eq!(to_public(untouched.clone()), untouched);
    }

    #[test]
    fn customer_name_requires_non_empty_string() {
        assert_eq!(customer_name(&record(json!({ "name": "X" }))), Ok("X"));
        assert_eq!(customer_name(&record(json!({}))), Err(NameError::Missing));
        assert_eq!(
            customer_name(&record(json!({ "name": null }))),
            Err(NameError::Missing)
        );
        assert_eq!(
            customer_name(&record(json!({ "name": "" }))),
            Err(NameError::Missing)
        );
        assert_eq!(
            customer_name(&record(json!({ "name": 7 }))),
            Err(NameError::NotAString)
        );
    }

    #[test]
    fn falsy_names_count_as_missing() {
        for name in [json!(false), json!(0), json!(0.0)] {
            assert_eq!(
                customer_name(&record(json!({ "name": name }))),
                Err(NameError::Missing)
            );
        }
        assert_eq!(
            customer_name(&record(json!({ "name": true }))),
            Err(NameError::NotAString)
        );
    }
}
