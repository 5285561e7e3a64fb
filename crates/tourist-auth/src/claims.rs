//! JWT claim structure for access tokens.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JWT claims for access tokens.
///
/// Claims carry identity only. The user's role is deliberately absent: it can
/// change between issuance and use, so authorization always reads it from the
/// store.
///
/// # Fields
///
/// - `email`: The principal's email address
/// - `iat`: Token issued-at timestamp
/// - `exp`: Token expiration timestamp
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// Principal's email address
    pub email: String,
    /// Token issued-at timestamp (Unix seconds)
    pub iat: i64,
    /// Token expiration timestamp (Unix seconds)
    pub exp: i64,
}

impl Claims {
    /// A token is live strictly before its expiry instant.
    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Claims {
        Claims {
            email: "test@example.com".to_string(),
            iat: 1_700_000_000,
            exp: 1_700_010_800,
        }
    }

    #[test]
    fn test_claims_serialize() {
        let serialized = serde_json::to_string(&sample()).unwrap();
        assert!(serialized.contains(r#""email":"test@example.com""#));
        assert!(!serialized.contains("role"));
    }

    #[test]
    fn test_claims_deserialize_ignores_extra_fields() {
        let json = r#"{"email":"user@test.com","name":"User","iat":10,"exp":20}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.email, "user@test.com");
        assert_eq!(claims.iat, 10);
        assert_eq!(claims.exp, 20);
    }

    #[test]
    fn test_expiry_boundary() {
        let claims = sample();
        assert!(!claims.is_expired_at(claims.exp - 1));
        assert!(claims.is_expired_at(claims.exp));
        assert!(claims.is_expired_at(claims.exp + 1));
    }
}
