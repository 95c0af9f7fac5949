//! Response envelope normalization.
//!
//! Backends answer in one of three shapes:
//!
//! * a serverless gateway envelope `{statusCode, headers, body: "<json string>"}`
//! * a `{success: bool, <resource>: ...}` wrapper
//! * the bare array or object
//!
//! [`Envelope::classify`] tags a parsed body with its shape and
//! [`Envelope::into_payload`] unwraps it down to the resource itself.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::ApiError;

/// A response body tagged by its outer shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    Gateway {
        status_code: u16,
        headers: Option<Map<String, Value>>,
        body: Value,
    },
    Wrapped {
        success: bool,
        fields: Map<String, Value>,
    },
    Bare(Value),
}

impl Envelope {
    pub fn classify(value: Value) -> Envelope {
        let mut fields = match value {
            Value::Object(fields) => fields,
            other => return Envelope::Bare(other),
        };

        let status_code = fields.get("statusCode").and_then(Value::as_u64);
        if let (Some(status_code), true) = (status_code, fields.contains_key("body")) {
            let headers = match fields.remove("headers") {
                Some(Value::Object(headers)) => Some(headers),
                _ => None,
            };
            return Envelope::Gateway {
                status_code: u16::try_from(status_code).unwrap_or(u16::MAX),
                headers,
                body: fields.remove("body").unwrap_or(Value::Null),
            };
        }

        if let Some(success) = fields.get("success").and_then(Value::as_bool) {
            fields.remove("success");
            return Envelope::Wrapped { success, fields };
        }

        Envelope::Bare(Value::Object(fields))
    }

    /// Unwrap to the resource payload. `keys` are the field names a
    /// `{success, ...}` wrapper may carry the resource under, tried in order.
    pub fn into_payload(self, keys: &[&str]) -> Result<Value, ApiError> {
        match self {
            Envelope::Gateway {
                status_code, body, ..
            } => {
                if !(200..300).contains(&status_code) {
                    return Err(ApiError::status(status_code));
                }
                let inner = match body {
                    Value::String(raw) => serde_json::from_str(&raw)?,
                    other => other,
                };
                Envelope::classify(inner).into_payload(keys)
            }
            Envelope::Wrapped {
                success: false,
                fields,
            } => {
                let reason = fields
                    .get("error")
                    .or_else(|| fields.get("message"))
                    .and_then(Value::as_str)
                    .unwrap_or("backend reported success=false");
                Err(ApiError::payload(reason))
            }
            Envelope::Wrapped {
                success: true,
                mut fields,
            } => keys
                .iter()
                .find_map(|key| fields.remove(*key))
                .ok_or_else(|| {
                    ApiError::payload(format!("wrapper carries none of {:?}", keys))
                }),
            Envelope::Bare(value) => Ok(value),
        }
    }
}

/// Classify, unwrap and deserialize a raw response body.
pub fn decode<T: DeserializeOwned>(raw: &str, keys: &[&str]) -> Result<T, ApiError> {
    let value: Value = serde_json::from_str(raw)?;
    let payload = Envelope::classify(value).into_payload(keys)?;
    Ok(serde_json::from_value(payload)?)
}

/// Check the body of a write that returns no resource, such as a delete.
///
/// An empty or non-JSON body is an acknowledgement. A gateway envelope with a
/// non-2xx `statusCode` or a `{success: false}` wrapper is a failure, at any
/// nesting depth.
pub fn acknowledge(raw: &str) -> Result<(), ApiError> {
    if raw.trim().is_empty() {
        return Ok(());
    }
    let Ok(value) = serde_json::from_str::<Value>(raw) else {
        return Ok(());
    };

    match Envelope::classify(value) {
        Envelope::Gateway {
            status_code, body, ..
        } => {
            if !(200..300).contains(&status_code) {
                return Err(ApiError::status(status_code));
            }
            match body {
                Value::String(inner) => acknowledge(&inner),
                other => acknowledge(&other.to_string()),
            }
        }
        wrapped @ Envelope::Wrapped { success: false, .. } => {
            wrapped.into_payload(&[]).map(|_| ())
        }
        Envelope::Wrapped { success: true, .. } | Envelope::Bare(_) => Ok(()),
    }
}
