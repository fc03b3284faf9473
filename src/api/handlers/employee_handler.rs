//! Employee handlers (registration, update, archival).

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post, put},
    Router,
};

use crate::api::extractors::EmployeeUpload;
use crate::api::handlers::parse_id;
use crate::api::AppState;
use crate::domain::{Employee, ExEmployee};
use crate::errors::AppResult;
use crate::types::{ApiResponse, Created, UserResponse};

/// Create employee routes
pub fn employee_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_employees))
        .route("/upload", post(register_employee))
        .route("/:id", put(update_employee).delete(delete_employee))
}

/// List all employees
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Employees",
    responses(
        (status = 200, description = "Employees as `{message, data}`", body = [Employee])
    )
)]
pub async fn list_employees(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<Employee>>>> {
    let employees = state.employee_service.list_employees().await?;
    Ok(Json(ApiResponse::new("Users fetched successfully", employees)))
}

/// Register a new employee (multipart form, optional JPEG `image`)
#[utoipa::path(
    post,
    path = "/api/users/upload",
    tag = "Employees",
    responses(
        (status = 201, description = "Employee as `{message, user}`", body = Employee),
        (status = 400, description = "Validation error or user already exists")
    )
)]
pub async fn register_employee(
    State(state): State<AppState>,
    upload: EmployeeUpload,
) -> AppResult<Created<UserResponse<Employee>>> {
    let employee = state
        .employee_service
        .register(upload.form, upload.image)
        .await?;

    Ok(Created(UserResponse::new(
        "User registered successfully",
        employee,
    )))
}

/// Update an employee; empty fields keep their stored value
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "Employees",
    params(("id" = i32, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee as `{message, user}`", body = Employee),
        (status = 400, description = "Validation error"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    upload: EmployeeUpload,
) -> AppResult<Json<UserResponse<Employee>>> {
    let id = parse_id(&id, "user")?;
    let employee = state
        .employee_service
        .update(id, upload.form, upload.image)
        .await?;

    Ok(Json(UserResponse::new("User updated successfully", employee)))
}

/// Remove an employee, keeping an archive copy
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Employees",
    params(("id" = i32, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Archived record as `{message, data}`", body = ExEmployee),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<ExEmployee>>> {
    let id = parse_id(&id, "user")?;
    let archived = state.employee_service.archive(id).await?;

    Ok(Json(ApiResponse::new(
        "User moved to ex-employees",
        archived,
    )))
}
