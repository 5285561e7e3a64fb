use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use tourist_auth::policy;
use tourist_core::{AppError, Role};
use tourist_db::{Document, UpdateResult};
use tourist_models::{
    AdminStatus, CreateUserDto, GuideStatus, MessageResponse, UserExistsResponse,
};
use tracing::instrument;

use super::service::{CreateUserOutcome, UserService};
use crate::errors::store_error;
use crate::middleware::auth::AuthUser;
use crate::middleware::role::RequireSelf;
use crate::modules::documents::parse_id;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Register a user (no-op when the email is already registered)
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserDto,
    responses(
        (status = 200, description = "User created", body = tourist_db::InsertOneResult),
        (status = 200, description = "Email already registered", body = UserExistsResponse),
        (status = 400, description = "Bad request", body = MessageResponse),
        (status = 422, description = "Validation error", body = MessageResponse),
        (status = 503, description = "Store unavailable", body = MessageResponse)
    ),
    tag = "Users"
)]
#[instrument(skip_all)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateUserDto>,
) -> Result<Response, AppError> {
    match UserService::create_user(state.store.as_ref(), dto)
        .await
        .map_err(store_error)?
    {
        CreateUserOutcome::Created(result) => Ok(Json(result).into_response()),
        CreateUserOutcome::AlreadyExists => Ok(Json(UserExistsResponse::new()).into_response()),
    }
}

/// List all users (requires authentication)
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All user documents"),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 503, description = "Store unavailable", body = MessageResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip_all)]
pub async fn get_users(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> Result<Json<Vec<Document>>, AppError> {
    let users = UserService::get_users(state.store.as_ref())
        .await
        .map_err(store_error)?;
    Ok(Json(users))
}

/// Whether the caller is an admin (only for the caller's own email)
#[utoipa::path(
    get,
    path = "/users/admin/{email}",
    params(
        ("email" = String, Path, description = "Must equal the email in the token")
    ),
    responses(
        (status = 200, description = "Admin status", body = AdminStatus),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 403, description = "Email is not the caller's", body = MessageResponse),
        (status = 503, description = "Store unavailable", body = MessageResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip_all, fields(email = %auth_user.email()))]
pub async fn admin_status(
    State(state): State<AppState>,
    RequireSelf(auth_user): RequireSelf,
) -> Result<Json<AdminStatus>, AppError> {
    let role = UserService::resolve_role(state.store.as_ref(), auth_user.email())
        .await
        .map_err(store_error)?;
    Ok(Json(AdminStatus {
        admin: policy::has_role(role, Role::Admin),
    }))
}

/// Whether the caller is a guide (only for the caller's own email)
#[utoipa::path(
    get,
    path = "/users/guide/{email}",
    params(
        ("email" = String, Path, description = "Must equal the email in the token")
    ),
    responses(
        (status = 200, description = "Guide status", body = GuideStatus),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 403, description = "Email is not the caller's", body = MessageResponse),
        (status = 503, description = "Store unavailable", body = MessageResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip_all, fields(email = %auth_user.email()))]
pub async fn guide_status(
    State(state): State<AppState>,
    RequireSelf(auth_user): RequireSelf,
) -> Result<Json<GuideStatus>, AppError> {
    let role = UserService::resolve_role(state.store.as_ref(), auth_user.email())
        .await
        .map_err(store_error)?;
    Ok(Json(GuideStatus {
        guide: policy::has_role(role, Role::Guide),
    }))
}

/// Promote a user to admin (caller must currently be an admin)
#[utoipa::path(
    patch,
    path = "/users/admin/{id}",
    params(
        ("id" = String, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Update result", body = UpdateResult),
        (status = 400, description = "Malformed id", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 403, description = "Caller is not an admin", body = MessageResponse),
        (status = 503, description = "Store unavailable", body = MessageResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip_all, fields(by = %auth_user.email(), id = %id))]
pub async fn make_admin(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<UpdateResult>, AppError> {
    let id = parse_id(&id)?;
    let result = UserService::set_role(state.store.as_ref(), id, Role::Admin)
        .await
        .map_err(store_error)?;
    Ok(Json(result))
}

/// Promote a user to guide (any authenticated caller)
#[utoipa::path(
    patch,
    path = "/users/guide/{id}",
    params(
        ("id" = String, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Update result", body = UpdateResult),
        (status = 400, description = "Malformed id", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 503, description = "Store unavailable", body = MessageResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip_all, fields(by = %auth_user.email(), id = %id))]
pub async fn make_guide(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<UpdateResult>, AppError> {
    policy::authenticated(auth_user.claims())
        .into_result()
        .map_err(|_| AppError::forbidden())?;

    let id = parse_id(&id)?;
    let result = UserService::set_role(state.store.as_ref(), id, Role::Guide)
        .await
        .map_err(store_error)?;
    Ok(Json(result))
}
