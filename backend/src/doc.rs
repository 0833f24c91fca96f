//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the department, employee and health endpoints with
//! their request, response and error schemas. The document backs Swagger UI
//! in debug builds and is printed by `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::departments::{DepartmentRequest, DepartmentResponse};
use crate::inbound::http::employees::{EmployeeRequest, EmployeeResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Personnel registry API",
        description = "Create and list departments and the employees assigned to them."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::departments::list_departments,
        crate::inbound::http::departments::create_department,
        crate::inbound::http::employees::list_employees,
        crate::inbound::http::employees::create_employee,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        DepartmentRequest,
        DepartmentResponse,
        EmployeeRequest,
        EmployeeResponse,
        Error,
        ErrorCode
    )),
    tags(
        (name = "departments", description = "Department registry"),
        (name = "employees", description = "Employee registry"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
