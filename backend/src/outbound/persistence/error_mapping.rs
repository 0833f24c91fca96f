//! Diesel error translation shared by the registry repositories.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::{DepartmentRepositoryError, EmployeeRepositoryError};

use super::pool::PoolError;

/// Store-level failure categories common to both tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum StoreFailure {
    Connection(&'static str),
    Query(&'static str),
    UniqueViolation,
    ForeignKeyViolation,
}

pub(crate) fn classify(error: &DieselError) -> StoreFailure {
    match error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), constraint = ?info.constraint_name(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            StoreFailure::UniqueViolation
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
            StoreFailure::ForeignKeyViolation
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            StoreFailure::Connection("database connection error")
        }
        DieselError::NotFound => StoreFailure::Query("record not found"),
        DieselError::QueryBuilderError(_) => StoreFailure::Query("database query error"),
        _ => StoreFailure::Query("database error"),
    }
}

pub(crate) fn map_department_pool_error(error: PoolError) -> DepartmentRepositoryError {
    DepartmentRepositoryError::connection(error.into_message())
}

pub(crate) fn map_employee_pool_error(error: PoolError) -> EmployeeRepositoryError {
    EmployeeRepositoryError::connection(error.into_message())
}

pub(crate) fn map_department_diesel_error(error: DieselError) -> DepartmentRepositoryError {
    match classify(&error) {
        StoreFailure::Connection(message) => DepartmentRepositoryError::connection(message),
        StoreFailure::Query(message) => DepartmentRepositoryError::query(message),
        // Departments carry no constraints beyond the primary key.
        StoreFailure::UniqueViolation | StoreFailure::ForeignKeyViolation => {
            DepartmentRepositoryError::query("database constraint violated")
        }
    }
}

/// Translate an employee insert or read failure.
///
/// `email` and `department_id` describe the row being written so constraint
/// violations can name the offending value.
pub(crate) fn map_employee_diesel_error(
    error: DieselError,
    email: &str,
    department_id: Option<i32>,
) -> EmployeeRepositoryError {
    match (classify(&error), department_id) {
        (StoreFailure::Connection(message), _) => EmployeeRepositoryError::connection(message),
        (StoreFailure::Query(message), _) => EmployeeRepositoryError::query(message),
        (StoreFailure::UniqueViolation, _) => EmployeeRepositoryError::duplicate_email(email),
        (StoreFailure::ForeignKeyViolation, Some(id)) => {
            EmployeeRepositoryError::unknown_department(id)
        }
        (StoreFailure::ForeignKeyViolation, None) => {
            EmployeeRepositoryError::query("database constraint violated")
        }
    }
}

/// Translate a read-side failure, where no constraint can fire.
pub(crate) fn map_employee_read_error(error: DieselError) -> EmployeeRepositoryError {
    match classify(&error) {
        StoreFailure::Connection(message) => EmployeeRepositoryError::connection(message),
        StoreFailure::Query(message) => EmployeeRepositoryError::query(message),
        StoreFailure::UniqueViolation | StoreFailure::ForeignKeyViolation => {
            EmployeeRepositoryError::query("database constraint violated")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::result::DatabaseErrorInformation;
    use rstest::rstest;

    struct Info(&'static str);

    impl DatabaseErrorInformation for Info {
        fn message(&self) -> &str {
            self.0
        }
        fn details(&self) -> Option<&str> {
            None
        }
        fn hint(&self) -> Option<&str> {
            None
        }
        fn table_name(&self) -> Option<&str> {
            Some("employees")
        }
        fn column_name(&self) -> Option<&str> {
            None
        }
        fn constraint_name(&self) -> Option<&str> {
            None
        }
        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    fn database_error(kind: DatabaseErrorKind) -> DieselError {
        DieselError::DatabaseError(kind, Box::new(Info("boom")))
    }

    #[rstest]
    #[case(
        database_error(DatabaseErrorKind::UniqueViolation),
        Some(2),
        EmployeeRepositoryError::duplicate_email("ada@example.com")
    )]
    #[case(
        database_error(DatabaseErrorKind::ForeignKeyViolation),
        Some(2),
        EmployeeRepositoryError::unknown_department(2)
    )]
    #[case(
        database_error(DatabaseErrorKind::ClosedConnection),
        None,
        EmployeeRepositoryError::connection("database connection error")
    )]
    #[case(DieselError::NotFound, None, EmployeeRepositoryError::query("record not found"))]
    #[case(
        database_error(DatabaseErrorKind::SerializationFailure),
        None,
        EmployeeRepositoryError::query("database error")
    )]
    fn employee_insert_failures_are_classified(
        #[case] error: DieselError,
        #[case] department_id: Option<i32>,
        #[case] expected: EmployeeRepositoryError,
    ) {
        assert_eq!(
            map_employee_diesel_error(error, "ada@example.com", department_id),
            expected
        );
    }

    #[rstest]
    fn department_failures_never_claim_constraints() {
        let mapped =
            map_department_diesel_error(database_error(DatabaseErrorKind::UniqueViolation));
        assert_eq!(
            mapped,
            DepartmentRepositoryError::query("database constraint violated")
        );
    }

    #[rstest]
    fn pool_failures_become_connection_errors() {
        let mapped = map_employee_pool_error(PoolError::checkout("timed out"));
        assert_eq!(mapped, EmployeeRepositoryError::connection("timed out"));
    }
}
