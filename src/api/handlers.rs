use crate::{
    api::{AppState, models::*},
    core::errors::FlatgateError,
};
use axum::{
    Json, Router,
    extract::{Path, Request, State, rejection::JsonRejection},
    middleware::{self, Next},
    response::IntoResponse,
    routing::{get, post},
};
use http::StatusCode;
use tracing::{info, warn};

pub const ADMIN_WORD_HEADER: &str = "x-admin-word";

/// Middleware that lets a request through only when `X-Admin-Word` matches.
async fn admin_middleware(
    State(service): State<AppState>,
    req: Request,
    next: Next,
) -> Result<impl IntoResponse, ApiError> {
    let supplied = req
        .headers()
        .get(ADMIN_WORD_HEADER)
        .and_then(|h| h.to_str().ok())
        .unwrap_or_default();

    if let Err(err) = service.authorize_admin(supplied) {
        warn!("Rejected admin request to {}", req.uri().path());
        return Err(err.into());
    }
    Ok(next.run(req).await)
}

// Define API routes
pub fn api_routes(service: AppState) -> Router {
    let admin_routes = Router::new()
        .route("/admin/users", post(create_user))
        .route("/admin/databases", get(list_databases))
        .route("/admin/databases/{name}", get(read_database))
        .route_layer(middleware::from_fn_with_state(service.clone(), admin_middleware));

    Router::new()
        .route("/health", get(health))
        .route("/sign-in", post(sign_in))
        .merge(admin_routes)
        .with_state(service)
}

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, FlatgateError> {
    payload
        .map(|Json(req)| req)
        .map_err(|rejection| FlatgateError::InvalidBody(rejection.body_text()))
}

pub async fn health() -> &'static str {
    "OK"
}

#[utoipa::path(
    post,
    path = "/api/sign-in",
    request_body = SignInRequest,
    responses(
        (status = 200, description = "Signed in", body = UserResponse),
        (status = 400, description = "Email or password missing", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn sign_in(
    State(service): State<AppState>,
    payload: Result<Json<SignInRequest>, JsonRejection>,
) -> Result<Json<UserResponse>, ApiError> {
    let req = body(payload)?;
    if req.email.trim().is_empty() || req.password.is_empty() {
        return Err(FlatgateError::MissingFields.into());
    }

    match service.sign_in(&req.email, &req.password).await? {
        Some(user) => Ok(Json(UserResponse { user })),
        None => {
            warn!("Failed sign-in for {}", req.email.trim());
            Err(FlatgateError::InvalidCredentials.into())
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/admin/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Email or password missing", body = ErrorResponse),
        (status = 403, description = "Invalid admin word", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("admin_word" = []))
)]
pub async fn create_user(
    State(service): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let req = body(payload)?;
    if req.email.trim().is_empty() || req.password.is_empty() {
        return Err(FlatgateError::MissingFields.into());
    }

    let user = service
        .create_user(&req.email, &req.password, req.name.as_deref().unwrap_or_default())
        .await?;
    info!("Admin created user {}", user.id);
    Ok((StatusCode::CREATED, Json(UserResponse { user })))
}

#[utoipa::path(
    get,
    path = "/api/admin/databases",
    responses(
        (status = 200, description = "Database names", body = DatabasesResponse),
        (status = 403, description = "Invalid admin word", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("admin_word" = []))
)]
pub async fn list_databases(State(service): State<AppState>) -> Result<Json<DatabasesResponse>, ApiError> {
    let databases = service.list_databases().await?;
    Ok(Json(DatabasesResponse { databases }))
}

#[utoipa::path(
    get,
    path = "/api/admin/databases/{name}",
    params(
        ("name" = String, Path, description = "Database file name without the .json extension")
    ),
    responses(
        (status = 200, description = "Database contents", body = DatabaseResponse),
        (status = 400, description = "Invalid database name", body = ErrorResponse),
        (status = 403, description = "Invalid admin word", body = ErrorResponse),
        (status = 404, description = "Database not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("admin_word" = []))
)]
pub async fn read_database(
    State(service): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<DatabaseResponse>, ApiError> {
    let data = service.read_database(&name).await?;
    Ok(Json(DatabaseResponse { data }))
}
