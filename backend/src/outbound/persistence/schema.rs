//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `migrations/` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Departments. `id` is assigned by a sequence starting at 1.
    departments (id) {
        id -> Int4,
        /// 1 to 100 characters.
        name -> Varchar,
        /// 1 to 100 characters.
        location -> Varchar,
    }
}

diesel::table! {
    /// Employees. `email` carries a unique constraint.
    employees (id) {
        id -> Int4,
        first_name -> Varchar,
        last_name -> Varchar,
        email -> Varchar,
        /// Nullable reference to `departments.id`.
        department_id -> Nullable<Int4>,
    }
}

diesel::joinable!(employees -> departments (department_id));
diesel::allow_tables_to_appear_in_same_query!(departments, employees);
