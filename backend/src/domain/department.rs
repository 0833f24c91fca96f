//! Department data model.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Employee;
use super::validation::{FieldViolation, ValidationErrors, bounded_text, text_field};

/// Maximum length of a department name or location.
pub const DEPARTMENT_TEXT_MAX: usize = 100;

/// Store-assigned department identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DepartmentId(i32);

impl DepartmentId {
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for DepartmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Validated payload for creating a department.
///
/// ## Invariants
/// - `name` and `location` each hold 1 to [`DEPARTMENT_TEXT_MAX`] characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDepartment {
    name: String,
    location: String,
}

impl NewDepartment {
    /// Validate both fields, reporting every failure.
    ///
    /// # Examples
    /// ```
    /// use personnel::domain::NewDepartment;
    ///
    /// assert!(NewDepartment::try_new("HR", "New York").is_ok());
    /// let err = NewDepartment::try_new("HR", "").expect_err("empty location");
    /// assert_eq!(err.fields(), vec!["location"]);
    /// ```
    pub fn try_new(
        name: impl Into<String>,
        location: impl Into<String>,
    ) -> Result<Self, ValidationErrors> {
        Self::collect(Ok(name.into()), Ok(location.into()))
    }

    /// Validate undecoded request fields, reporting absent or mistyped values
    /// alongside length failures.
    ///
    /// # Examples
    /// ```
    /// use personnel::domain::NewDepartment;
    /// use serde_json::json;
    ///
    /// let err = NewDepartment::from_fields(Some(json!("")), None).expect_err("invalid");
    /// assert_eq!(err.fields(), vec!["name", "location"]);
    /// ```
    pub fn from_fields(
        name: Option<Value>,
        location: Option<Value>,
    ) -> Result<Self, ValidationErrors> {
        Self::collect(text_field("name", name), text_field("location", location))
    }

    fn collect(
        name: Result<String, FieldViolation>,
        location: Result<String, FieldViolation>,
    ) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let name =
            errors.take(name.and_then(|value| bounded_text("name", value, DEPARTMENT_TEXT_MAX)));
        let location = errors.take(
            location.and_then(|value| bounded_text("location", value, DEPARTMENT_TEXT_MAX)),
        );
        match (name, location) {
            (Some(name), Some(location)) => Ok(Self { name, location }),
            _ => Err(errors),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

/// Persisted department row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
    pub location: String,
}

/// Department read model with its employees resolved at read time.
///
/// The `employees` list is filled by an explicit query on
/// `employees.department_id`; it is never stored alongside the department.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentWithEmployees {
    pub department: Department,
    pub employees: Vec<Employee>,
}

impl DepartmentWithEmployees {
    /// A freshly created department, which nothing can reference yet.
    pub fn without_employees(department: Department) -> Self {
        Self {
            department,
            employees: Vec::new(),
        }
    }
}
