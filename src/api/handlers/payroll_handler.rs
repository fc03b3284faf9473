//! Payroll handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Json,
    routing::{get, put},
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::handlers::parse_id;
use crate::api::AppState;
use crate::domain::{NewPayroll, OneOrMany, Payroll, PayrollPatch};
use crate::errors::{AppError, AppResult};
use crate::types::{ApiResponse, Created, MessageResponse};

/// Create payroll routes
pub fn payroll_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_payrolls)
                .post(create_payrolls)
                .delete(delete_all_payrolls),
        )
        .route("/:id", put(update_payroll).delete(delete_payroll))
}

/// List all payroll rows
#[utoipa::path(
    get,
    path = "/api/payrolls",
    tag = "Payrolls",
    responses(
        (status = 200, description = "Rows as `{message, data}`", body = [Payroll])
    )
)]
pub async fn list_payrolls(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<Payroll>>>> {
    let rows = state.payroll_service.list_payrolls().await?;
    Ok(Json(ApiResponse::new("Payrolls fetched successfully", rows)))
}

/// Store one payroll object or an array of them
#[utoipa::path(
    post,
    path = "/api/payrolls",
    tag = "Payrolls",
    request_body = [NewPayroll],
    responses(
        (status = 201, description = "Created rows as `{message, data}`", body = [Payroll]),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_payrolls(
    State(state): State<AppState>,
    payload: Result<Json<OneOrMany<NewPayroll>>, JsonRejection>,
) -> AppResult<Created<ApiResponse<Vec<Payroll>>>> {
    let Json(body) = payload?;
    let rows = state
        .payroll_service
        .create_payrolls(body.into_vec())
        .await?;

    Ok(Created(ApiResponse::new("Payroll saved successfully", rows)))
}

/// Change only the fields present in the body
#[utoipa::path(
    put,
    path = "/api/payrolls/{id}",
    tag = "Payrolls",
    params(("id" = i32, Path, description = "Payroll ID")),
    request_body = PayrollPatch,
    responses(
        (status = 200, description = "Updated row as `{message, data}`", body = Payroll),
        (status = 400, description = "Invalid payroll ID or validation error"),
        (status = 404, description = "Payroll not found")
    )
)]
pub async fn update_payroll(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<ValidatedJson<PayrollPatch>, AppError>,
) -> AppResult<Json<ApiResponse<Payroll>>> {
    let id = parse_id(&id, "payroll")?;
    let ValidatedJson(patch) = payload?;
    let row = state.payroll_service.update_payroll(id, patch).await?;
    Ok(Json(ApiResponse::new("Payroll updated successfully", row)))
}

/// Delete one payroll row
#[utoipa::path(
    delete,
    path = "/api/payrolls/{id}",
    tag = "Payrolls",
    params(("id" = i32, Path, description = "Payroll ID")),
    responses(
        (status = 200, description = "Deleted", body = MessageResponse),
        (status = 404, description = "Payroll not found")
    )
)]
pub async fn delete_payroll(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_id(&id, "payroll")?;
    state.payroll_service.delete_payroll(id).await?;
    Ok(Json(MessageResponse::new("Payroll deleted successfully")))
}

/// Delete every payroll row
#[utoipa::path(
    delete,
    path = "/api/payrolls",
    tag = "Payrolls",
    responses((status = 200, description = "All rows deleted", body = MessageResponse))
)]
pub async fn delete_all_payrolls(State(state): State<AppState>) -> AppResult<Json<MessageResponse>> {
    state.payroll_service.delete_all_payrolls().await?;
    Ok(Json(MessageResponse::new("All payrolls deleted successfully")))
}
