use tourist_auth::create_access_token;
use tourist_config::JwtConfig;
use tourist_core::AppError;
use tourist_models::{TokenRequest, TokenResponse};

pub struct AuthService;

impl AuthService {
    /// Signs a token for whatever email the caller presents.
    ///
    /// No credential is checked and the user need not exist; the token only
    /// asserts identity, and every role decision is made later against the
    /// store.
    pub fn issue_token(
        dto: TokenRequest,
        jwt_config: &JwtConfig,
    ) -> Result<TokenResponse, AppError> {
        let token = create_access_token(&dto.email, jwt_config)?;
        tracing::info!(email = %dto.email, "access token issued");
        Ok(TokenResponse { token })
    }
}
