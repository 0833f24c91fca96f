//! End-to-end behaviour of the registry endpoints over the in-memory store.

use std::sync::Arc;

use actix_http::Request;
use actix_web::{
    App,
    body::BoxBody,
    dev::{Service, ServiceResponse},
    http::StatusCode,
    test::{self, TestRequest},
    web,
};
use personnel::Trace;
use personnel::domain::{RegistryOptions, RegistryService};
use personnel::inbound::http::configure;
use personnel::inbound::http::state::HttpState;
use personnel::outbound::memory::InMemoryRegistryStore;
use rstest::rstest;
use serde_json::{Value, json};

async fn init_app(
    options: RegistryOptions,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error> {
    let store = Arc::new(InMemoryRegistryStore::new());
    let service = Arc::new(RegistryService::new(store.clone(), store).with_options(options));
    test::init_service(
        App::new()
            .app_data(web::Data::new(HttpState::from_service(service)))
            .configure(configure)
            .wrap(Trace),
    )
    .await
}

async fn post<S>(app: &S, uri: &str, body: Value) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let res = test::call_service(app, TestRequest::post().uri(uri).set_json(body).to_request()).await;
    let status = res.status();
    (status, test::read_body_json(res).await)
}

async fn get<S>(app: &S, uri: &str) -> Value
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let res = test::call_service(app, TestRequest::get().uri(uri).to_request()).await;
    assert_eq!(res.status(), StatusCode::OK, "GET {uri}");
    test::read_body_json(res).await
}

fn employee(first_name: &str, email: &str, department_id: Option<i64>) -> Value {
    json!({
        "first_name": first_name,
        "last_name": "Smith",
        "email": email,
        "department_id": department_id,
    })
}

fn ids(body: &Value) -> Vec<i64> {
    body.as_array()
        .expect("array body")
        .iter()
        .filter_map(|item| item["id"].as_i64())
        .collect()
}

#[actix_web::test]
async fn first_department_on_an_empty_store_gets_id_one() {
    let app = init_app(RegistryOptions::default()).await;

    let (status, body) = post(
        &app,
        "/departments/",
        json!({"name": "HR", "location": "New York"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": 1, "name": "HR", "location": "New York", "employees": []})
    );
}

#[actix_web::test]
async fn rejected_payloads_do_not_consume_identifiers() {
    let app = init_app(RegistryOptions::default()).await;

    let (status, body) = post(&app, "/departments/", json!({"name": "HR", "location": ""})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"]["errors"][0]["field"], "location");

    let (_, created) = post(&app, "/departments/", json!({"name": "HR", "location": "Paris"})).await;
    assert_eq!(created["id"], 1);
    assert_eq!(get(&app, "/departments/").await.as_array().map(Vec::len), Some(1));
}

#[actix_web::test]
async fn malformed_email_is_rejected_and_nothing_is_stored() {
    let app = init_app(RegistryOptions::default()).await;

    let (status, body) = post(&app, "/employees/", employee("Alice", "not-an-email", None)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "validation_failed");
    assert_eq!(get(&app, "/employees/").await, json!([]));
}

#[actix_web::test]
async fn duplicate_email_leaves_the_first_employee_untouched() {
    let app = init_app(RegistryOptions::default()).await;
    post(&app, "/employees/", employee("Alice", "a@x.io", None)).await;

    let (status, body) = post(&app, "/employees/", employee("Bob", "a@x.io", None)).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["details"]["errors"][0]["field"], "email");
    let listed = get(&app, "/employees/").await;
    assert_eq!(ids(&listed), vec![1]);
    assert_eq!(listed[0]["first_name"], "Alice");
}

#[actix_web::test]
async fn department_rosters_follow_employee_creation() {
    let app = init_app(RegistryOptions::default()).await;
    post(&app, "/departments/", json!({"name": "HR", "location": "New York"})).await;
    post(&app, "/departments/", json!({"name": "Finance", "location": "Boston"})).await;

    assert_eq!(get(&app, "/departments/").await[0]["employees"], json!([]));

    post(&app, "/employees/", employee("Alice", "alice@example.com", Some(1))).await;
    post(&app, "/employees/", employee("Bob", "bob@example.com", Some(2))).await;
    post(&app, "/employees/", employee("Carol", "carol@example.com", Some(1))).await;

    let departments = get(&app, "/departments/").await;
    assert_eq!(ids(&departments[0]["employees"]), vec![1, 3]);
    assert_eq!(ids(&departments[1]["employees"]), vec![2]);
    assert_eq!(departments[0]["employees"][0]["department_id"], 1);
}

#[actix_web::test]
async fn repeated_department_reads_are_identical() {
    let app = init_app(RegistryOptions::default()).await;
    post(&app, "/departments/", json!({"name": "HR", "location": "New York"})).await;
    post(&app, "/departments/", json!({"name": "Finance", "location": "Boston"})).await;
    post(&app, "/employees/", employee("Alice", "alice@example.com", Some(2))).await;
    post(&app, "/employees/", employee("Bob", "bob@example.com", Some(1))).await;

    let first = get(&app, "/departments/").await;
    let second = get(&app, "/departments/").await;

    assert_eq!(first, second);
    assert_eq!(ids(&first[1]["employees"]), vec![1]);
}

#[actix_web::test]
async fn every_missing_or_mistyped_field_is_reported() {
    let app = init_app(RegistryOptions::default()).await;

    let (status, body) = post(
        &app,
        "/employees/",
        json!({"first_name": "", "email": "not-an-email", "department_id": "abc"}),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let fields: Vec<&str> = body["details"]["errors"]
        .as_array()
        .expect("errors array")
        .iter()
        .filter_map(|error| error["field"].as_str())
        .collect();
    assert_eq!(fields, vec!["first_name", "last_name", "email", "department_id"]);
}

#[rstest]
#[case("/departments/?skip=1&limit=1", vec![2])]
#[case("/departments/?skip=0&limit=2", vec![1, 2])]
#[case("/departments/?skip=3", vec![])]
#[case("/departments/?limit=1000000", vec![1, 2, 3])]
#[case("/departments", vec![1, 2, 3])]
#[actix_web::test]
async fn department_pagination_windows_by_id(#[case] uri: &str, #[case] expected: Vec<i64>) {
    let app = init_app(RegistryOptions::default()).await;
    for name in ["HR", "Finance", "Legal"] {
        post(&app, "/departments/", json!({"name": name, "location": "Boston"})).await;
    }

    assert_eq!(ids(&get(&app, uri).await), expected);
}

#[actix_web::test]
async fn employees_filter_by_department_and_zero_means_all() {
    let app = init_app(RegistryOptions::default()).await;
    post(&app, "/departments/", json!({"name": "HR", "location": "New York"})).await;
    post(&app, "/employees/", employee("Alice", "alice@example.com", Some(1))).await;
    post(&app, "/employees/", employee("Bob", "bob@example.com", None)).await;

    assert_eq!(ids(&get(&app, "/employees/?department_id=1").await), vec![1]);
    assert_eq!(ids(&get(&app, "/employees/?department_id=0").await), vec![1, 2]);
    assert_eq!(ids(&get(&app, "/employees/?department_id=7").await), Vec::<i64>::new());
}

#[rstest]
#[case(RegistryOptions::default(), StatusCode::OK)]
#[case(RegistryOptions { verify_department_exists: true }, StatusCode::UNPROCESSABLE_ENTITY)]
#[actix_web::test]
async fn dangling_department_reference_depends_on_verification(
    #[case] options: RegistryOptions,
    #[case] expected: StatusCode,
) {
    let app = init_app(options).await;

    let (status, _) = post(&app, "/employees/", employee("Alice", "alice@example.com", Some(5))).await;

    assert_eq!(status, expected);
}

#[actix_web::test]
async fn error_responses_carry_the_trace_id_header() {
    let app = init_app(RegistryOptions::default()).await;

    let res = test::call_service(
        &app,
        TestRequest::post()
            .uri("/departments/")
            .set_json(json!({"name": "", "location": "Paris"}))
            .to_request(),
    )
    .await;

    let header = res
        .headers()
        .get("trace-id")
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .expect("trace-id header");
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["traceId"].as_str(), Some(header.as_str()));
}
