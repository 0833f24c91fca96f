//! Extractor configuration shared by inbound HTTP adapters.
//!
//! Bodies that are not a JSON object and unparseable query strings are
//! rejected with the same `validation_failed` payload as field-level
//! violations, so clients see one error shape for every rejected request.
//! Absent or mistyped body fields never reach these handlers; the request
//! types decode them loosely and report them per field.

use actix_web::web::{JsonConfig, QueryConfig};
use actix_web::{HttpRequest, error::JsonPayloadError, error::QueryPayloadError};
use tracing::debug;

use crate::domain::{Error, FieldViolation, ValidationErrors, ViolationCode};

fn rejection(field: &str, code: ViolationCode, message: String) -> actix_web::Error {
    let error = Error::from(ValidationErrors::from(FieldViolation::new(
        field, code, message,
    )));
    actix_web::Error::from(error)
}

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!(path = %req.path(), error = %err, "rejected request body");
    rejection("body", ViolationCode::InvalidBody, err.to_string())
}

fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!(path = %req.path(), error = %err, "rejected query string");
    rejection("query", ViolationCode::InvalidQuery, err.to_string())
}

/// JSON extractor configuration mapping payload failures to 422 responses.
pub fn json_config() -> JsonConfig {
    JsonConfig::default().error_handler(json_error_handler)
}

/// Query extractor configuration mapping parse failures to 422 responses.
pub fn query_config() -> QueryConfig {
    QueryConfig::default().error_handler(query_error_handler)
}
