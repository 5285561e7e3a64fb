//! Token issuance DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Payload identifying the principal a token is issued for.
///
/// Only `email` is kept; any other fields the client sends are ignored.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct TokenRequest {
    #[validate(email)]
    #[schema(example = "alice@example.com")]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extra_fields_are_ignored() {
        let request: TokenRequest =
            serde_json::from_str(r#"{"email":"a@x.com","name":"A","photo":"p.png"}"#).unwrap();
        assert_eq!(request.email, "a@x.com");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_invalid_email_fails_validation() {
        let request: TokenRequest = serde_json::from_str(r#"{"email":"nope"}"#).unwrap();
        assert!(request.validate().is_err());
    }
}
