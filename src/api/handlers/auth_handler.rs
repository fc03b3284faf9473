//! Authentication handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Json,
    routing::{get, post},
    Router,
};

use crate::api::handlers::parse_id;
use crate::api::AppState;
use crate::domain::{Credentials, LoginRequest, Principal};
use crate::errors::AppResult;
use crate::types::UserResponse;

use super::hr_routes;

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/profile/:id", get(profile))
        .nest("/hr", hr_routes())
}

/// Login as an employee, HR user or the super admin
///
/// The `stakeholder` field picks which credentials are checked.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful; `user` carries a `role` tag"),
        (status = 400, description = "Missing fields or invalid stakeholder type"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<Json<UserResponse<Principal>>> {
    let Json(request) = payload?;
    let credentials = Credentials::try_from(request)?;
    let principal = state.auth_service.login(credentials).await?;

    Ok(Json(UserResponse::new(principal.login_message(), principal)))
}

/// Fetch an employee profile in the same shape as the employee login
#[utoipa::path(
    get,
    path = "/api/auth/profile/{id}",
    tag = "Authentication",
    params(("id" = i32, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee profile with `role: employee`"),
        (status = 404, description = "User not found")
    )
)]
pub async fn profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<UserResponse<Principal>>> {
    let id = parse_id(&id, "user")?;
    let employee = state.employee_service.get_profile(id).await?;

    Ok(Json(UserResponse::new(
        "Profile fetched successfully",
        Principal::Employee(employee),
    )))
}
