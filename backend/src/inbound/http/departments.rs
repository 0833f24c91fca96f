//! Department HTTP handlers.
//!
//! ```text
//! GET  /departments/?skip=0&limit=10
//! POST /departments/ {"name":"HR","location":"New York"}
//! ```

use actix_web::web;
use pagination::PageRequest;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

use crate::domain::{DepartmentWithEmployees, Error, NewDepartment};
use crate::inbound::http::ApiResult;
use crate::inbound::http::employees::EmployeeResponse;
use crate::inbound::http::state::HttpState;

/// Request body for `POST /departments/`.
///
/// Fields stay undecoded so that absent or mistyped values are reported per
/// field together with length failures.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct DepartmentRequest {
    #[serde(default)]
    #[schema(value_type = String, required = true, example = "HR", min_length = 1, max_length = 100)]
    pub name: Option<Value>,
    #[serde(default)]
    #[schema(value_type = String, required = true, example = "New York", min_length = 1, max_length = 100)]
    pub location: Option<Value>,
}

impl TryFrom<DepartmentRequest> for NewDepartment {
    type Error = Error;

    fn try_from(value: DepartmentRequest) -> Result<Self, Self::Error> {
        NewDepartment::from_fields(value.name, value.location).map_err(Error::from)
    }
}

/// Department with the employees currently referencing it.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DepartmentResponse {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub employees: Vec<EmployeeResponse>,
}

impl From<DepartmentWithEmployees> for DepartmentResponse {
    fn from(value: DepartmentWithEmployees) -> Self {
        let DepartmentWithEmployees {
            department,
            employees,
        } = value;
        Self {
            id: department.id.get(),
            name: department.name,
            location: department.location,
            employees: employees.into_iter().map(EmployeeResponse::from).collect(),
        }
    }
}

/// Window over the department listing.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListDepartmentsParams {
    /// Rows to skip before the window starts. Defaults to 0.
    pub skip: Option<u64>,
    /// Maximum rows returned. Defaults to 10.
    pub limit: Option<u64>,
}

/// List departments ordered by id, each with its employees.
#[utoipa::path(
    get,
    path = "/departments/",
    params(ListDepartmentsParams),
    responses(
        (status = 200, description = "Departments", body = [DepartmentResponse]),
        (status = 422, description = "Invalid query", body = Error),
        (status = 503, description = "Store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["departments"],
    operation_id = "listDepartments"
)]
pub async fn list_departments(
    state: web::Data<HttpState>,
    params: web::Query<ListDepartmentsParams>,
) -> ApiResult<web::Json<Vec<DepartmentResponse>>> {
    let ListDepartmentsParams { skip, limit } = params.into_inner();
    let page = PageRequest::from_parts(skip, limit);
    let departments = state.query.list_departments(page).await?;
    Ok(web::Json(
        departments
            .into_iter()
            .map(DepartmentResponse::from)
            .collect(),
    ))
}

/// Create a department.
#[utoipa::path(
    post,
    path = "/departments/",
    request_body = DepartmentRequest,
    responses(
        (status = 200, description = "Department created", body = DepartmentResponse),
        (status = 422, description = "Validation failed", body = Error),
        (status = 503, description = "Store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["departments"],
    operation_id = "createDepartment"
)]
pub async fn create_department(
    state: web::Data<HttpState>,
    payload: web::Json<DepartmentRequest>,
) -> ApiResult<web::Json<DepartmentResponse>> {
    let department = NewDepartment::try_from(payload.into_inner())?;
    let created = state.command.create_department(department).await?;
    Ok(web::Json(DepartmentResponse::from(created)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::{TestApp, post_json};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use rstest::rstest;
    use serde_json::{Value, json};

    #[actix_web::test]
    async fn create_department_returns_empty_roster() {
        let app = TestApp::new().init().await;

        let res = post_json(&app, "/departments/", json!({"name": "HR", "location": "New York"}))
            .await;

        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(
            body,
            json!({"id": 1, "name": "HR", "location": "New York", "employees": []})
        );
    }

    #[rstest]
    #[case(json!({"name": "HR", "location": ""}), vec!["location"])]
    #[case(json!({"name": "", "location": ""}), vec!["name", "location"])]
    #[case(json!({"name": "x".repeat(101), "location": "Paris"}), vec!["name"])]
    #[case(json!({"name": ""}), vec!["name", "location"])]
    #[case(json!({"name": 5, "location": ["Paris"]}), vec!["name", "location"])]
    #[actix_web::test]
    async fn create_department_rejects_invalid_fields(
        #[case] payload: Value,
        #[case] fields: Vec<&str>,
    ) {
        let app = TestApp::new().init().await;

        let res = post_json(&app, "/departments/", payload).await;

        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(res).await;
        let reported: Vec<&str> = body["details"]["errors"]
            .as_array()
            .expect("errors array")
            .iter()
            .filter_map(|error| error["field"].as_str())
            .collect();
        assert_eq!(reported, fields);
    }

    #[actix_web::test]
    async fn missing_location_is_reported_by_field() {
        let app = TestApp::new().init().await;

        let res = post_json(&app, "/departments/", json!({"name": "HR"})).await;

        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(
            body["details"]["errors"],
            json!([{
                "field": "location",
                "code": "missing",
                "message": "location is required",
            }])
        );
    }

    #[actix_web::test]
    async fn list_departments_windows_by_skip_and_limit() {
        let app = TestApp::new().init().await;
        for name in ["HR", "Finance", "Legal"] {
            post_json(&app, "/departments/", json!({"name": name, "location": "Boston"})).await;
        }

        let req = test::TestRequest::get()
            .uri("/departments/?skip=1&limit=1")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.as_array().map(Vec::len), Some(1));
        assert_eq!(body[0]["name"], "Finance");
    }

    #[rstest]
    #[case("/departments")]
    #[case("/departments/")]
    #[actix_web::test]
    async fn list_departments_accepts_either_path_form(#[case] uri: &str) {
        let app = TestApp::new().init().await;

        let req = test::TestRequest::get().uri(uri).to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
    }
}
