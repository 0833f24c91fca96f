//! Employee HTTP handlers.
//!
//! ```text
//! GET  /employees/?department_id=1&skip=0&limit=10
//! POST /employees/ {"first_name":"Alice","last_name":"Smith","email":"alice@example.com","department_id":1}
//! ```

use actix_web::web;
use pagination::PageRequest;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

use crate::domain::{DepartmentId, Employee, EmployeeFilter, Error, NewEmployee};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Request body for `POST /employees/`.
///
/// Fields stay undecoded so that absent or mistyped values are reported per
/// field together with length and format failures.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct EmployeeRequest {
    #[serde(default)]
    #[schema(value_type = String, required = true, example = "Alice", min_length = 1, max_length = 50)]
    pub first_name: Option<Value>,
    #[serde(default)]
    #[schema(value_type = String, required = true, example = "Smith", min_length = 1, max_length = 50)]
    pub last_name: Option<Value>,
    #[serde(default)]
    #[schema(value_type = String, required = true, example = "alice.smith@example.com")]
    pub email: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<i32>, example = 1)]
    pub department_id: Option<Value>,
}

impl TryFrom<EmployeeRequest> for NewEmployee {
    type Error = Error;

    fn try_from(value: EmployeeRequest) -> Result<Self, Self::Error> {
        NewEmployee::from_fields(
            value.first_name,
            value.last_name,
            value.email,
            value.department_id,
        )
        .map_err(Error::from)
    }
}

/// Employee as returned by every endpoint. `department_id` is `null` when
/// unassigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EmployeeResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department_id: Option<i32>,
}

impl From<Employee> for EmployeeResponse {
    fn from(value: Employee) -> Self {
        Self {
            id: value.id.get(),
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            department_id: value.department_id.map(DepartmentId::get),
        }
    }
}

/// Filter and window over the employee listing.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListEmployeesParams {
    /// Restrict to one department. `0` is treated as no filter.
    pub department_id: Option<i32>,
    /// Rows to skip before the window starts. Defaults to 0.
    pub skip: Option<u64>,
    /// Maximum rows returned. Defaults to 10.
    pub limit: Option<u64>,
}

/// List employees ordered by id, optionally filtered by department.
#[utoipa::path(
    get,
    path = "/employees/",
    params(ListEmployeesParams),
    responses(
        (status = 200, description = "Employees", body = [EmployeeResponse]),
        (status = 422, description = "Invalid query", body = Error),
        (status = 503, description = "Store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["employees"],
    operation_id = "listEmployees"
)]
pub async fn list_employees(
    state: web::Data<HttpState>,
    params: web::Query<ListEmployeesParams>,
) -> ApiResult<web::Json<Vec<EmployeeResponse>>> {
    let ListEmployeesParams {
        department_id,
        skip,
        limit,
    } = params.into_inner();
    let filter = EmployeeFilter::from_query(department_id);
    let page = PageRequest::from_parts(skip, limit);
    let employees = state.query.list_employees(filter, page).await?;
    Ok(web::Json(
        employees.into_iter().map(EmployeeResponse::from).collect(),
    ))
}

/// Create an employee.
#[utoipa::path(
    post,
    path = "/employees/",
    request_body = EmployeeRequest,
    responses(
        (status = 200, description = "Employee created", body = EmployeeResponse),
        (status = 409, description = "Email already registered", body = Error),
        (status = 422, description = "Validation failed", body = Error),
        (status = 503, description = "Store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["employees"],
    operation_id = "createEmployee"
)]
pub async fn create_employee(
    state: web::Data<HttpState>,
    payload: web::Json<EmployeeRequest>,
) -> ApiResult<web::Json<EmployeeResponse>> {
    let employee = NewEmployee::try_from(payload.into_inner())?;
    let created = state.command.create_employee(employee).await?;
    Ok(web::Json(EmployeeResponse::from(created)))
}
