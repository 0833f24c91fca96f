//! Employee data model and email validation.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::DepartmentId;
use super::validation::{
    FieldViolation, ValidationErrors, ViolationCode, bounded_text, optional_integer_field,
    text_field,
};

/// Maximum length of a first or last name.
pub const EMPLOYEE_NAME_MAX: usize = 50;
/// Maximum length of an email address.
pub const EMAIL_MAX: usize = 254;
/// Maximum length of the local part of an email address.
pub const EMAIL_LOCAL_MAX: usize = 64;

/// Store-assigned employee identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(i32);

impl EmployeeId {
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Dot-atom local part, dot-separated domain labels and an alphabetic TLD.
        let pattern = concat!(
            r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*",
            r"@([A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,63}$",
        );
        Regex::new(pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Syntactically valid email address with a lower-cased domain.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Validate an address.
    ///
    /// # Examples
    /// ```
    /// use personnel::domain::Email;
    ///
    /// let email = Email::parse("Ada@Example.COM").expect("valid email");
    /// assert_eq!(email.as_ref(), "Ada@example.com");
    /// assert!(Email::parse("not-an-email").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, FieldViolation> {
        let invalid = || {
            FieldViolation::new(
                "email",
                ViolationCode::InvalidEmail,
                "email must be a valid email address",
            )
        };

        if raw.chars().count() > EMAIL_MAX || !email_regex().is_match(raw) {
            return Err(invalid());
        }
        let (local, domain) = raw.rsplit_once('@').ok_or_else(invalid)?;
        if local.chars().count() > EMAIL_LOCAL_MAX {
            return Err(invalid());
        }
        Ok(Self(format!("{local}@{}", domain.to_ascii_lowercase())))
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated payload for creating an employee.
///
/// ## Invariants
/// - `first_name` and `last_name` hold 1 to [`EMPLOYEE_NAME_MAX`] characters.
/// - `email` is a syntactically valid address.
/// - `department_id` is not checked against the department store here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    first_name: String,
    last_name: String,
    email: Email,
    department_id: Option<DepartmentId>,
}

impl NewEmployee {
    /// Validate every field, reporting all failures together.
    pub fn try_new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: &str,
        department_id: Option<DepartmentId>,
    ) -> Result<Self, ValidationErrors> {
        Self::collect(
            Ok(first_name.into()),
            Ok(last_name.into()),
            Ok(email.to_owned()),
            Ok(department_id),
        )
    }

    /// Validate undecoded request fields.
    ///
    /// Absent or mistyped values are reported with the same field names as
    /// length and format failures, so one response lists every problem.
    ///
    /// # Examples
    /// ```
    /// use personnel::domain::NewEmployee;
    /// use serde_json::json;
    ///
    /// let err = NewEmployee::from_fields(
    ///     Some(json!("")),
    ///     None,
    ///     Some(json!("not-an-email")),
    ///     Some(json!("abc")),
    /// )
    /// .expect_err("invalid employee");
    /// assert_eq!(
    ///     err.fields(),
    ///     vec!["first_name", "last_name", "email", "department_id"],
    /// );
    /// ```
    pub fn from_fields(
        first_name: Option<Value>,
        last_name: Option<Value>,
        email: Option<Value>,
        department_id: Option<Value>,
    ) -> Result<Self, ValidationErrors> {
        Self::collect(
            text_field("first_name", first_name),
            text_field("last_name", last_name),
            text_field("email", email),
            optional_integer_field("department_id", department_id)
                .map(|id| id.map(DepartmentId::new)),
        )
    }

    fn collect(
        first_name: Result<String, FieldViolation>,
        last_name: Result<String, FieldViolation>,
        email: Result<String, FieldViolation>,
        department_id: Result<Option<DepartmentId>, FieldViolation>,
    ) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let first_name = errors.take(
            first_name.and_then(|value| bounded_text("first_name", value, EMPLOYEE_NAME_MAX)),
        );
        let last_name = errors.take(
            last_name.and_then(|value| bounded_text("last_name", value, EMPLOYEE_NAME_MAX)),
        );
        let email = errors.take(email.and_then(|raw| Email::parse(&raw)));
        let department_id = errors.take(department_id);

        match (first_name, last_name, email, department_id) {
            (Some(first_name), Some(last_name), Some(email), Some(department_id)) => Ok(Self {
                first_name,
                last_name,
                email,
                department_id,
            }),
            _ => Err(errors),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn department_id(&self) -> Option<DepartmentId> {
        self.department_id
    }
}

/// Persisted employee row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department_id: Option<DepartmentId>,
}

/// Restriction applied when listing employees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeFilter {
    All,
    Department(DepartmentId),
}

impl EmployeeFilter {
    /// Interpret the optional `department_id` query value.
    ///
    /// A zero identifier means "no filter", matching the established API
    /// behaviour. Stores never issue id 0, so no department is hidden.
    ///
    /// # Examples
    /// ```
    /// use personnel::domain::{DepartmentId, EmployeeFilter};
    ///
    /// assert_eq!(EmployeeFilter::from_query(None), EmployeeFilter::All);
    /// assert_eq!(EmployeeFilter::from_query(Some(0)), EmployeeFilter::All);
    /// assert_eq!(
    ///     EmployeeFilter::from_query(Some(3)),
    ///     EmployeeFilter::Department(DepartmentId::new(3)),
    /// );
    /// ```
    pub fn from_query(department_id: Option<i32>) -> Self {
        match department_id {
            None | Some(0) => Self::All,
            Some(id) => Self::Department(DepartmentId::new(id)),
        }
    }

    /// Whether `employee` passes this filter.
    pub fn matches(&self, employee: &Employee) -> bool {
        match self {
            Self::All => true,
            Self::Department(id) => employee.department_id == Some(*id),
        }
    }
}
