//! Schema-less record payloads.
//!
//! Object shapes are defined per org and per type, so records are not fixed
//! structs: a record is an ordered map from field name to JSON value
//! (string | number | boolean | null | nested). Wire types round-trip
//! exactly; the mapper never coerces `"true"` to `true` or back.

use serde_json::Value;

use crate::error::{Error, Result};

/// An sObject record: an ordered field-name to value map.
///
/// `serde_json` is built with `preserve_order`, so field order survives
/// decode and re-encode.
pub type Record = serde_json::Map<String, Value>;

/// Extract the raw object descriptors from a list payload.
///
/// The list endpoint returns the global-describe wrapper; the descriptors
/// live under its `sobjects` key and are passed through as raw maps in
/// source order, without normalization into typed summaries.
pub(crate) fn object_list(payload: Value) -> Result<Vec<Record>> {
    let Value::Object(mut wrapper) = payload else {
        return Err(Error::Mapping(
            "object list payload is not a JSON object".into(),
        ));
    };
    let Some(Value::Array(descriptors)) = wrapper.remove("sobjects") else {
        return Err(Error::Mapping(
            "object list payload has no `sobjects` array".into(),
        ));
    };
    descriptors
        .into_iter()
        .map(|descriptor| match descriptor {
            Value::Object(record) => Ok(record),
            other => Err(Error::Mapping(format!(
                "object descriptor is not a JSON object: {other}"
            ))),
        })
        .collect()
}

/// Decode a response body into a record.
///
/// The remote may legitimately return an empty body on success (update);
/// that decodes to an empty map, not an error.
pub(crate) fn from_body(body: &str) -> Result<Record> {
    if body.trim().is_empty() {
        return Ok(Record::new());
    }
    serde_json::from_str(body).map_err(|e| Error::Mapping(e.to_string()))
}
