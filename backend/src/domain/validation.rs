//! Field-level validation shared by the create payloads.
//!
//! Constructors collect every failing field into [`ValidationErrors`] rather
//! than stopping at the first one, so a client can fix a payload in one pass.

use serde::Serialize;
use serde_json::{Value, json};

use super::Error;

/// Machine-readable reason a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCode {
    Missing,
    InvalidType,
    TooShort,
    TooLong,
    InvalidEmail,
    DuplicateEmail,
    UnknownDepartment,
    InvalidBody,
    InvalidQuery,
}

/// One rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub code: ViolationCode,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, code: ViolationCode, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code,
            message: message.into(),
        }
    }
}

/// Every violation found in a payload, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldViolation>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: FieldViolation) {
        self.0.push(violation);
    }

    /// Record the violation from `check`, if any.
    pub fn check(&mut self, check: Result<(), FieldViolation>) {
        if let Err(violation) = check {
            self.push(violation);
        }
    }

    /// Keep the value from `check`, recording its violation instead on failure.
    pub fn take<T>(&mut self, check: Result<T, FieldViolation>) -> Option<T> {
        match check {
            Ok(value) => Some(value),
            Err(violation) => {
                self.push(violation);
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }

    /// Names of the rejected fields.
    pub fn fields(&self) -> Vec<&str> {
        self.0.iter().map(|v| v.field.as_str()).collect()
    }

    /// `Ok(value)` when nothing was recorded, otherwise `Err(self)`.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl From<FieldViolation> for ValidationErrors {
    fn from(violation: FieldViolation) -> Self {
        Self(vec![violation])
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields = self.fields().join(", ");
        write!(f, "invalid fields: {fields}")
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationErrors> for Error {
    fn from(errors: ValidationErrors) -> Self {
        Error::validation_failed("request validation failed")
            .with_details(json!({ "errors": errors.0 }))
    }
}

/// Check that `value` holds between `min` and `max` characters inclusive.
///
/// Lengths count Unicode scalar values and the input is not trimmed.
pub fn check_length(field: &str, value: &str, min: usize, max: usize) -> Result<(), FieldViolation> {
    let length = value.chars().count();
    if length < min {
        return Err(FieldViolation::new(
            field,
            ViolationCode::TooShort,
            format!("{field} must be at least {min} characters"),
        ));
    }
    if length > max {
        return Err(FieldViolation::new(
            field,
            ViolationCode::TooLong,
            format!("{field} must be at most {max} characters"),
        ));
    }
    Ok(())
}

/// Check that `value` holds between 1 and `max` characters, handing it back.
pub fn bounded_text(field: &str, value: String, max: usize) -> Result<String, FieldViolation> {
    check_length(field, &value, 1, max).map(|()| value)
}

fn invalid_type(field: &str, expected: &str) -> FieldViolation {
    FieldViolation::new(
        field,
        ViolationCode::InvalidType,
        format!("{field} must be {expected}"),
    )
}

/// Read a required string field from an undecoded request value.
///
/// An absent field and an explicit `null` are both reported as missing.
pub fn text_field(field: &str, value: Option<Value>) -> Result<String, FieldViolation> {
    match value {
        None | Some(Value::Null) => Err(FieldViolation::new(
            field,
            ViolationCode::Missing,
            format!("{field} is required"),
        )),
        Some(Value::String(text)) => Ok(text),
        Some(_) => Err(invalid_type(field, "a string")),
    }
}

/// Read an optional 32-bit integer field from an undecoded request value.
pub fn optional_integer_field(field: &str, value: Option<Value>) -> Result<Option<i32>, FieldViolation> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(number)) => number
            .as_i64()
            .and_then(|raw| i32::try_from(raw).ok())
            .map(Some)
            .ok_or_else(|| invalid_type(field, "an integer")),
        Some(_) => Err(invalid_type(field, "an integer")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case("", Some(ViolationCode::TooShort))]
    #[case("a", None)]
    #[case(" ", None)]
    #[case("ééééé", None)]
    #[case("abcdef", Some(ViolationCode::TooLong))]
    fn check_length_counts_characters(#[case] value: &str, #[case] expected: Option<ViolationCode>) {
        let result = check_length("name", value, 1, 5);
        assert_eq!(result.err().map(|v| v.code), expected);
    }

    #[rstest]
    fn collects_every_violation() {
        let mut errors = ValidationErrors::new();
        errors.check(check_length("name", "", 1, 5));
        errors.check(check_length("location", "ok", 1, 5));
        errors.check(check_length("location", "too long", 1, 5));
        assert_eq!(errors.fields(), vec!["name", "location"]);
        assert!(errors.into_result(()).is_err());
    }

    #[rstest]
    #[case(None, ViolationCode::Missing)]
    #[case(Some(Value::Null), ViolationCode::Missing)]
    #[case(Some(json!(7)), ViolationCode::InvalidType)]
    #[case(Some(json!(["HR"])), ViolationCode::InvalidType)]
    fn text_field_reports_absent_or_mistyped_values(
        #[case] value: Option<Value>,
        #[case] expected: ViolationCode,
    ) {
        let violation = text_field("name", value).expect_err("rejected");
        assert_eq!(violation.field, "name");
        assert_eq!(violation.code, expected);
    }

    #[rstest]
    fn text_field_keeps_empty_strings_for_length_checks() {
        assert_eq!(text_field("name", Some(json!(""))), Ok(String::new()));
    }

    #[rstest]
    #[case(None, Ok(None))]
    #[case(Some(Value::Null), Ok(None))]
    #[case(Some(json!(3)), Ok(Some(3)))]
    #[case(Some(json!("abc")), Err(ViolationCode::InvalidType))]
    #[case(Some(json!(1.5)), Err(ViolationCode::InvalidType))]
    #[case(Some(json!(4_294_967_296_i64)), Err(ViolationCode::InvalidType))]
    fn optional_integer_field_accepts_only_i32(
        #[case] value: Option<Value>,
        #[case] expected: Result<Option<i32>, ViolationCode>,
    ) {
        let result = optional_integer_field("department_id", value).map_err(|v| v.code);
        assert_eq!(result, expected);
    }

    #[rstest]
    fn converts_into_validation_failed_error_with_details() {
        let errors = ValidationErrors::from(FieldViolation::new(
            "email",
            ViolationCode::InvalidEmail,
            "email must be a valid email address",
        ));
        let error = Error::from(errors);

        assert_eq!(error.code(), ErrorCode::ValidationFailed);
        let details = error.details().expect("details present");
        assert_eq!(details["errors"][0]["field"], "email");
        assert_eq!(details["errors"][0]["code"], "invalid_email");
    }
}
