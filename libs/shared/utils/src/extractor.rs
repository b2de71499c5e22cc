use std::sync::OnceLock;

use axum::{extract::rejection::JsonRejection, Json};
use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::Value;

use shared_models::error::{AppError, FieldError};

const DATA_ERROR_PREFIX: &str = "Failed to deserialize the JSON body into the target type: ";

fn location_suffix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+at line \d+ column \d+$").unwrap())
}

fn missing_field() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^missing field `([^`]+)`$").unwrap())
}

fn pathed_error() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([A-Za-z0-9_\.\[\]]+): (.+)$").unwrap())
}

/// Turns a JSON body rejection into a 400 carrying field-level detail.
///
/// Deserialization failures name the offending field (`patientAge`,
/// `appointmentDate`, ...); syntax and content-type failures are reported
/// against the whole body with an empty path.
pub fn body_rejection(rejection: JsonRejection, message: &str) -> AppError {
    let errors = match &rejection {
        JsonRejection::JsonDataError(_) => vec![field_error(&rejection.body_text())],
        _ => vec![FieldError {
            path: String::new(),
            message: rejection.body_text(),
        }],
    };

    invalid(message, errors)
}

/// Checks a JSON body in two passes and deserializes it into `T`.
///
/// The first pass works on the raw value: a non-object body is rejected, and
/// every key of `required_fields` that is absent gets its own `"Required"`
/// entry. Only when all required keys are present is the typed pass run,
/// which reports the first type mismatch with its field path.
pub fn validate_body<T: DeserializeOwned>(
    payload: Result<Json<Value>, JsonRejection>,
    required_fields: &[&str],
    message: &str,
) -> Result<T, AppError> {
    let Json(body) = payload.map_err(|e| body_rejection(e, message))?;

    let Some(fields) = body.as_object() else {
        return Err(invalid(
            message,
            vec![FieldError {
                path: String::new(),
                message: format!("Expected object, received {}", json_kind(&body)),
            }],
        ));
    };

    let missing: Vec<FieldError> = required_fields
        .iter()
        .filter(|field| !fields.contains_key(**field))
        .map(|field| FieldError {
            path: field.to_string(),
            message: "Required".to_string(),
        })
        .collect();
    if !missing.is_empty() {
        return Err(invalid(message, missing));
    }

    let bytes = serde_json::to_vec(&body).map_err(|e| {
        invalid(
            message,
            vec![FieldError {
                path: String::new(),
                message: e.to_string(),
            }],
        )
    })?;
    let Json(parsed) = Json::<T>::from_bytes(&bytes).map_err(|e| body_rejection(e, message))?;

    Ok(parsed)
}

fn invalid(message: &str, errors: Vec<FieldError>) -> AppError {
    AppError::ValidationError {
        message: message.to_string(),
        errors,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn field_error(body_text: &str) -> FieldError {
    let detail = body_text.strip_prefix(DATA_ERROR_PREFIX).unwrap_or(body_text);
    let detail = location_suffix().replace(detail, "").into_owned();

    if let Some(captures) = missing_field().captures(&detail) {
        return FieldError {
            path: captures[1].to_string(),
            message: "Required".to_string(),
        };
    }

    if let Some(captures) = pathed_error().captures(&detail) {
        return FieldError {
            path: captures[1].to_string(),
            message: captures[2].to_string(),
        };
    }

    FieldError {
        path: String::new(),
        message: detail,
    }
}
