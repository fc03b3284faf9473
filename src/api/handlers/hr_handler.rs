//! HR account management handlers.

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::AppState;
use crate::errors::AppResult;
use crate::types::{Created, MessageResponse};

/// HR account creation request
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateHrRequest {
    #[schema(example = "hr@example.com")]
    pub email: String,
    pub password: String,
}

/// HR account deletion request
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct DeleteHrRequest {
    #[schema(example = "hr@example.com")]
    pub email: String,
}

/// HR account listing
#[derive(Debug, Serialize, ToSchema)]
pub struct HrListResponse {
    pub message: String,
    pub hr_list: Vec<String>,
}

/// Created HR account (email only)
#[derive(Debug, Serialize, ToSchema)]
pub struct HrCreatedResponse {
    pub message: String,
    pub email: String,
}

/// Create HR routes (nested under `/auth/hr`)
pub fn hr_routes() -> Router<AppState> {
    Router::new().route(
        "/",
        get(list_hr_accounts)
            .post(create_hr_account)
            .delete(delete_hr_account),
    )
}

/// List HR account emails
#[utoipa::path(
    get,
    path = "/api/auth/hr",
    tag = "HR Accounts",
    responses((status = 200, description = "HR emails", body = HrListResponse))
)]
pub async fn list_hr_accounts(State(state): State<AppState>) -> AppResult<Json<HrListResponse>> {
    let hr_list = state.hr_account_service.list_emails().await?;
    Ok(Json(HrListResponse {
        message: "HR accounts fetched successfully".to_string(),
        hr_list,
    }))
}

/// Create an HR account
#[utoipa::path(
    post,
    path = "/api/auth/hr",
    tag = "HR Accounts",
    request_body = CreateHrRequest,
    responses(
        (status = 201, description = "HR account created", body = HrCreatedResponse),
        (status = 400, description = "Missing fields, invalid email or duplicate")
    )
)]
pub async fn create_hr_account(
    State(state): State<AppState>,
    payload: Result<Json<CreateHrRequest>, JsonRejection>,
) -> AppResult<Created<HrCreatedResponse>> {
    let Json(request) = payload?;
    let account = state
        .hr_account_service
        .create_account(request.email, request.password)
        .await?;

    Ok(Created(HrCreatedResponse {
        message: "HR account created successfully".to_string(),
        email: account.email,
    }))
}

/// Delete an HR account by email
#[utoipa::path(
    delete,
    path = "/api/auth/hr",
    tag = "HR Accounts",
    request_body = DeleteHrRequest,
    responses(
        (status = 200, description = "HR account deleted", body = MessageResponse),
        (status = 400, description = "Email missing"),
        (status = 404, description = "HR/Employer not found")
    )
)]
pub async fn delete_hr_account(
    State(state): State<AppState>,
    payload: Result<Json<DeleteHrRequest>, JsonRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Json(request) = payload?;
    state
        .hr_account_service
        .delete_account(request.email.trim())
        .await?;
    Ok(Json(MessageResponse::new("HR account deleted successfully")))
}
