use axum::Json;
use axum::extract::State;
use tourist_core::AppError;
use tourist_models::{MessageResponse, TokenRequest, TokenResponse};
use tracing::instrument;

use super::service::AuthService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Exchange an email for an access token valid for three hours
#[utoipa::path(
    post,
    path = "/jwt",
    request_body = TokenRequest,
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 400, description = "Body missing or not JSON", body = MessageResponse),
        (status = 422, description = "Email is not a valid address", body = MessageResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn issue_token(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<TokenRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let response = AuthService::issue_token(dto, &state.jwt_config)?;
    Ok(Json(response))
}
