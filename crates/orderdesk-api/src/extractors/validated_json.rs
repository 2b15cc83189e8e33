//! JSON body extractor that runs `validator` rules before the handler.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use orderdesk_core::AppError;
use orderdesk_core::error::FieldViolation;

use crate::error::ApiError;

/// Deserializes a JSON body and validates it.
///
/// Malformed JSON and rule violations both become `Validation` errors, so
/// the client always gets a `400` with the standard error body.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejection_error)?;

        value
            .validate()
            .map_err(|errors| AppError::invalid_fields(field_violations(&errors)))?;

        Ok(Self(value))
    }
}

/// Turn a body rejection into a validation error, naming the field when the
/// JSON was well-formed but a value had the wrong type.
fn rejection_error(rejection: JsonRejection) -> AppError {
    let text = rejection.body_text();
    if let JsonRejection::JsonDataError(_) = rejection {
        if let Some((field, reason)) = data_error_field(&text) {
            return AppError::invalid_fields(vec![FieldViolation::new(field, reason)]);
        }
    }
    AppError::validation(text)
}

/// Split `"...target type: quantity: invalid type: ..."` into the field
/// path and the reason. Errors at the document root carry no path.
fn data_error_field(text: &str) -> Option<(&str, &str)> {
    let (_, detail) = text.split_once("target type: ")?;
    let (path, reason) = detail.split_once(": ")?;
    let is_path = !path.is_empty()
        && path
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '[' || c == ']');
    is_path.then_some((path, reason))
}

/// Flattens `validator` errors into field violations, sorted by field.
///
/// `validator` keys errors by Rust field name; they are reported under the
/// camelCase name the client sent.
pub fn field_violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut violations: Vec<FieldViolation> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            let field = wire_name(field);
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("failed `{}` check", e.code));
                FieldViolation::new(field.clone(), message)
            })
        })
        .collect();

    violations.sort_by(|a, b| a.field.cmp(&b.field));
    violations
}

fn wire_name(field: &str) -> String {
    let mut name = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            name.extend(c.to_uppercase());
            upper = false;
        } else {
            name.push(c);
        }
    }
    name
}
