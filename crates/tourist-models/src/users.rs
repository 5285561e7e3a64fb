//! User data models and DTOs.
//!
//! # Core Types
//!
//! - [`UserRecord`] - The parts of a stored user the API reasons about
//!
//! # Request DTOs
//!
//! - [`CreateUserDto`] - Sign-up payload
//!
//! # Response DTOs
//!
//! - [`UserExistsResponse`] - Sign-up for an email that is already registered
//! - [`AdminStatus`] / [`GuideStatus`] - Role checks for the caller

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tourist_core::Role;
use tourist_core::serde::deserialize_optional_role;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A user document as read back from the store.
///
/// Profile fields beyond these are kept in the store but not modelled here.
/// `role` is `None` for users without one and for values that are not a
/// known role.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_optional_role")]
    pub role: Option<Role>,
}

impl UserRecord {
    pub fn from_document(document: Map<String, Value>) -> Result<Self, serde_json::Error> {
        serde_json::from_value(Value::Object(document))
    }
}

/// Sign-up payload.
///
/// Any other profile fields the client sends are stored as given. Clients
/// cannot choose a role or an id here; roles are only granted through the
/// promotion endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserDto {
    #[validate(email)]
    #[schema(example = "alice@example.com")]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(flatten)]
    #[schema(ignore)]
    pub extra: Map<String, Value>,
}

impl CreateUserDto {
    pub fn into_document(self) -> Map<String, Value> {
        let mut document = self.extra;
        document.remove("role");
        document.remove("_id");
        document.insert("email".to_string(), Value::String(self.email));
        if let Some(name) = self.name {
            document.insert("name".to_string(), Value::String(name));
        }
        if let Some(photo) = self.photo {
            document.insert("photo".to_string(), Value::String(photo));
        }
        document
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserExistsResponse {
    #[schema(example = "user already exists")]
    pub message: String,
    pub inserted_id: Option<Uuid>,
}

impl UserExistsResponse {
    pub fn new() -> Self {
        Self {
            message: "user already exists".to_string(),
            inserted_id: None,
        }
    }
}

impl Default for UserExistsResponse {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AdminStatus {
    pub admin: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GuideStatus {
    pub guide: bool,
}
