//! Integration tests for API endpoints.
//!
//! Requests go through the full router with services wired over mocked
//! repositories, so no database is needed.

mod common;

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use sea_orm::{DatabaseBackend, MockDatabase};
use serde_json::{json, Value};
use tower::ServiceExt;

use common::{sample_employee, stored, TestUnitOfWork};
use hr_payroll_api::api::{create_router, AppState};
use hr_payroll_api::config::Config;
use hr_payroll_api::infra::Database;
use hr_payroll_api::services::Services;

const BOUNDARY: &str = "----hr-test-boundary";
const JPEG_BYTES: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46];

fn app(uow: TestUnitOfWork) -> Router {
    let config = Config::default().with_super_admin_password("root-pass");
    let services = Services::from_uow(uow.into_arc(), config.clone());
    let database = Arc::new(Database::from_connection(
        MockDatabase::new(DatabaseBackend::Postgres).into_connection(),
    ));
    create_router(AppState::new(&services, database, config))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Registration form fields, minus any listed in `skip`.
fn form_fields(skip: &[&str]) -> Vec<(&'static str, &'static str)> {
    [
        ("employee_id", "EMP-001"),
        ("registration_date", "2024-01-10"),
        ("joining_date", "2024-02-01"),
        ("post_applied_for", "Employee"),
        ("full_name", "Ayesha Khan"),
        ("gender", "Female"),
        ("cnic", "35202-1234567-8"),
        ("dob", "1996-07-21"),
        ("permanent_address", "12 Canal Road, Lahore"),
        ("contact_number", "03001234567"),
        ("email", "ayesha@example.com"),
        ("degree", "BSCS"),
        ("institute", "PUCIT"),
        ("grade", "A"),
        ("year", "2018"),
        ("in_time", "09:00"),
        ("out_time", "17:00"),
        ("Salary_Cap", "90000"),
        ("guardian_phone", "03007654321"),
        ("has_disease", "No"),
        ("skills", r#"["rust","sql"]"#),
    ]
    .into_iter()
    .filter(|(name, _)| !skip.contains(name))
    .collect()
}

fn multipart_request(uri: &str, fields: &[(&str, &str)], image: Option<&[u8]>) -> Request<Body> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                BOUNDARY, name, value
            )
            .as_bytes(),
        );
    }
    if let Some(bytes) = image {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"me.jpg\"\r\nContent-Type: image/jpeg\r\n\r\n",
                BOUNDARY
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_register_with_jpeg_returns_data_uri() {
    let mut uow = TestUnitOfWork::default();
    uow.employees.expect_find_by_email().returning(|_| Ok(None));
    uow.employees
        .expect_create()
        .returning(|details| Ok(stored(details, 1)));

    let (status, body) = send(
        app(uow),
        multipart_request("/api/users/upload", &form_fields(&[]), Some(JPEG_BYTES)),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "User registered successfully");
    assert_eq!(body["user"]["Salary_Cap"], 90000);
    assert_eq!(body["user"]["skills"], json!(["rust", "sql"]));

    let uri = body["user"]["image"].as_str().unwrap();
    let encoded = uri.strip_prefix("data:image/jpeg;base64,").unwrap();
    assert_eq!(STANDARD.decode(encoded).unwrap(), JPEG_BYTES);
}

#[tokio::test]
async fn test_register_missing_field() {
    let (status, body) = send(
        app(TestUnitOfWork::default()),
        multipart_request("/api/users/upload", &form_fields(&["cnic"]), None),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "cnic is required");
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_list_employees() {
    let mut uow = TestUnitOfWork::default();
    uow.employees
        .expect_list()
        .returning(|| Ok(vec![sample_employee(1)]));

    let request = Request::builder()
        .uri("/api/users")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app(uow), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Users fetched successfully");
    assert_eq!(body["data"][0]["id"], 1);
    assert_eq!(body["data"][0]["image"], Value::Null);
}

#[tokio::test]
async fn test_superadmin_wrong_password() {
    let (status, body) = send(
        app(TestUnitOfWork::default()),
        json_request(
            "POST",
            "/api/auth/login",
            json!({"stakeholder": "superadmin", "password": "guess"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_superadmin_login() {
    let (status, body) = send(
        app(TestUnitOfWork::default()),
        json_request(
            "POST",
            "/api/auth/login",
            json!({"stakeholder": "superadmin", "password": "root-pass"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Super admin login successful");
    assert_eq!(body["user"], json!({"role": "superadmin"}));
}

#[tokio::test]
async fn test_login_invalid_stakeholder() {
    let (status, body) = send(
        app(TestUnitOfWork::default()),
        json_request("POST", "/api/auth/login", json!({"stakeholder": "manager"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid stakeholder type");
}

#[tokio::test]
async fn test_malformed_json_is_a_json_error() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(app(TestUnitOfWork::default()), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_profile_carries_employee_role() {
    let mut uow = TestUnitOfWork::default();
    uow.employees
        .expect_find_by_id()
        .returning(|id| Ok(Some(sample_employee(id))));

    let request = Request::builder()
        .uri("/api/auth/profile/9")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app(uow), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["role"], "employee");
    assert_eq!(body["user"]["id"], 9);
}

#[tokio::test]
async fn test_update_payroll_bad_id() {
    let (status, body) = send(
        app(TestUnitOfWork::default()),
        json_request("PUT", "/api/payrolls/abc", json!({"gross_salary": 1.0})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid payroll ID");
}

#[tokio::test]
async fn test_update_payroll_bad_id_wins_over_bad_body() {
    let (status, body) = send(
        app(TestUnitOfWork::default()),
        json_request("PUT", "/api/payrolls/abc", json!({"month": "May 2024"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid payroll ID");
}

#[tokio::test]
async fn test_update_payroll_bad_month() {
    let (status, body) = send(
        app(TestUnitOfWork::default()),
        json_request("PUT", "/api/payrolls/4", json!({"month": "May 2024"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "month must be formatted as YYYY-MM");
}

#[tokio::test]
async fn test_delete_missing_ex_employee() {
    let mut uow = TestUnitOfWork::default();
    uow.ex_employees
        .expect_delete()
        .returning(|_| Err(hr_payroll_api::AppError::not_found("Ex-employee")));

    let request = Request::builder()
        .method("DELETE")
        .uri("/api/exemployees/5")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app(uow), request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Ex-employee not found");
}

#[tokio::test]
async fn test_hr_list() {
    let mut uow = TestUnitOfWork::default();
    uow.hr_accounts.expect_list().returning(|| Ok(Vec::new()));

    let request = Request::builder()
        .uri("/api/auth/hr")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app(uow), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["hr_list"], json!([]));
}
