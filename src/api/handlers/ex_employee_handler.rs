//! Ex-employee (archive) handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{delete, get},
    Router,
};

use crate::api::extractors::EmployeeUpload;
use crate::api::handlers::parse_id;
use crate::api::AppState;
use crate::domain::ExEmployee;
use crate::errors::AppResult;
use crate::types::{ApiResponse, Created, MessageResponse};

/// Create ex-employee routes
pub fn ex_employee_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_ex_employees).post(create_ex_employee))
        .route("/:id", delete(delete_ex_employee))
}

/// List archived employees
#[utoipa::path(
    get,
    path = "/api/exemployees",
    tag = "Ex-employees",
    responses(
        (status = 200, description = "Archive as `{message, data}`", body = [ExEmployee])
    )
)]
pub async fn list_ex_employees(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<ExEmployee>>>> {
    let archived = state.ex_employee_service.list_ex_employees().await?;
    Ok(Json(ApiResponse::new(
        "Ex-employees fetched successfully",
        archived,
    )))
}

/// Add an archive row directly (multipart form plus optional `exit_date`)
#[utoipa::path(
    post,
    path = "/api/exemployees",
    tag = "Ex-employees",
    responses(
        (status = 201, description = "Archived record as `{message, data}`", body = ExEmployee),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_ex_employee(
    State(state): State<AppState>,
    upload: EmployeeUpload,
) -> AppResult<Created<ApiResponse<ExEmployee>>> {
    let archived = state
        .ex_employee_service
        .create(upload.form, upload.image)
        .await?;

    Ok(Created(ApiResponse::new(
        "Ex-employee created successfully",
        archived,
    )))
}

/// Permanently delete an archive row
#[utoipa::path(
    delete,
    path = "/api/exemployees/{id}",
    tag = "Ex-employees",
    params(("id" = i32, Path, description = "Ex-employee ID")),
    responses(
        (status = 200, description = "Deleted", body = MessageResponse),
        (status = 404, description = "Ex-employee not found")
    )
)]
pub async fn delete_ex_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_id(&id, "ex-employee")?;
    state.ex_employee_service.delete(id).await?;
    Ok(Json(MessageResponse::new("Ex-employee deleted successfully")))
}
