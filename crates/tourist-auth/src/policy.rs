//! Authorization policies.
//!
//! Each policy is a pure predicate over the verified [`Claims`], the request
//! and, when needed, the user's current stored role. The HTTP layer performs
//! the single store lookup and passes the outcome in as `Option<Role>`:
//! `None` covers both "no such user" and "user has no role", and both deny
//! wherever a role is required.
//!
//! | Endpoint                      | Policy                    |
//! |-------------------------------|---------------------------|
//! | `GET /users/admin/{email}`    | [`self_match`]            |
//! | `GET /users/guide/{email}`    | [`self_match`]            |
//! | `PATCH /users/admin/{id}`     | [`admin_only`]            |
//! | `PATCH /users/guide/{id}`     | [`authenticated`]         |

use std::fmt;

use tourist_core::Role;

use crate::claims::Claims;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DenyReason {
    /// The path names a different principal than the token.
    NotSelf,
    /// The stored role is not one of the required ones.
    MissingRole {
        required: &'static [Role],
        actual: Option<Role>,
    },
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DenyReason::NotSelf => f.write_str("requested principal does not match token"),
            DenyReason::MissingRole { required, actual } => {
                let required = required
                    .iter()
                    .map(Role::as_str)
                    .collect::<Vec<_>>()
                    .join("|");
                match actual {
                    Some(role) => write!(f, "role {} required, found {}", required, role),
                    None => write!(f, "role {} required, found none", required),
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(DenyReason),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }

    /// Allow as `Ok`, the denial reason as `Err`.
    pub fn into_result(self) -> Result<(), DenyReason> {
        match self {
            Decision::Allow => Ok(()),
            Decision::Deny(reason) => Err(reason),
        }
    }
}

/// Any verified principal passes.
pub fn authenticated(_claims: &Claims) -> Decision {
    Decision::Allow
}

/// The requested email must be the principal's own, compared exactly.
pub fn self_match(claims: &Claims, requested_email: &str) -> Decision {
    if claims.email == requested_email {
        Decision::Allow
    } else {
        Decision::Deny(DenyReason::NotSelf)
    }
}

/// The resolved role must be one of `allowed`.
pub fn role_membership(resolved: Option<Role>, allowed: &'static [Role]) -> Decision {
    match resolved {
        Some(role) if allowed.contains(&role) => Decision::Allow,
        actual => Decision::Deny(DenyReason::MissingRole {
            required: allowed,
            actual,
        }),
    }
}

pub fn admin_only(resolved: Option<Role>) -> Decision {
    role_membership(resolved, &[Role::Admin])
}

/// Whether a resolved role is exactly `role`, for status lookups.
pub fn has_role(resolved: Option<Role>, role: Role) -> bool {
    resolved == Some(role)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(email: &str) -> Claims {
        Claims {
            email: email.to_string(),
            iat: 0,
            exp: i64::MAX,
        }
    }

    #[test]
    fn test_self_match() {
        let principal = claims("alice@x.com");
        assert!(self_match(&principal, "alice@x.com").is_allowed());
        assert_eq!(
            self_match(&principal, "bob@x.com"),
            Decision::Deny(DenyReason::NotSelf)
        );
    }

    #[test]
    fn test_self_match_is_exact() {
        let principal = claims("alice@x.com");
        assert!(!self_match(&principal, "Alice@x.com").is_allowed());
        assert!(!self_match(&principal, "alice@x.com ").is_allowed());
    }

    #[test]
    fn test_admin_only() {
        assert!(admin_only(Some(Role::Admin)).is_allowed());
        assert!(!admin_only(Some(Role::Guide)).is_allowed());
        assert_eq!(
            admin_only(None),
            Decision::Deny(DenyReason::MissingRole {
                required: &[Role::Admin],
                actual: None,
            })
        );
    }

    #[test]
    fn test_role_membership_multiple() {
        const STAFF: &[Role] = &[Role::Guide, Role::Admin];
        assert!(role_membership(Some(Role::Guide), STAFF).is_allowed());
        assert!(role_membership(Some(Role::Admin), STAFF).is_allowed());
        assert!(!role_membership(None, STAFF).is_allowed());
    }

    #[test]
    fn test_role_membership_empty_denies() {
        assert!(!role_membership(Some(Role::Admin), &[]).is_allowed());
    }

    #[test]
    fn test_authenticated_always_allows() {
        assert!(authenticated(&claims("anyone@x.com")).is_allowed());
    }

    #[test]
    fn test_into_result() {
        assert_eq!(authenticated(&claims("a@x.com")).into_result(), Ok(()));
        assert_eq!(
            self_match(&claims("a@x.com"), "b@x.com").into_result(),
            Err(DenyReason::NotSelf)
        );
    }

    #[test]
    fn test_has_role() {
        assert!(has_role(Some(Role::Guide), Role::Guide));
        assert!(!has_role(Some(Role::Admin), Role::Guide));
        assert!(!has_role(None, Role::Admin));
    }

    #[test]
    fn test_deny_reason_display() {
        let reason = DenyReason::MissingRole {
            required: &[Role::Admin],
            actual: Some(Role::Guide),
        };
        assert_eq!(reason.to_string(), "role admin required, found guide");
    }
}
