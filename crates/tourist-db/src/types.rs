use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;
use uuid::Uuid;

/// A stored JSON object. Documents read back from a store always carry
/// their id under [`ID_FIELD`].
pub type Document = Map<String, Value>;

pub const ID_FIELD: &str = "_id";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    Packages,
    Stories,
    Bookings,
    Wishlists,
}

impl Collection {
    pub const ALL: [Collection; 5] = [
        Collection::Users,
        Collection::Packages,
        Collection::Stories,
        Collection::Bookings,
        Collection::Wishlists,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Packages => "packages",
            Collection::Stories => "stories",
            Collection::Bookings => "bookings",
            Collection::Wishlists => "wishlists",
        }
    }
}

/// Equality filter: an optional id plus top-level field values that must
/// all match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    pub id: Option<Uuid>,
    pub fields: Document,
}

impl Filter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn by_id(id: Uuid) -> Self {
        Self {
            id: Some(id),
            fields: Document::new(),
        }
    }

    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    pub fn matches(&self, id: Uuid, document: &Document) -> bool {
        if self.id.is_some_and(|wanted| wanted != id) {
            return false;
        }
        self.fields
            .iter()
            .all(|(field, value)| document.get(field) == Some(value))
    }
}

/// Attaches the id to a stored body for callers.
pub(crate) fn with_id(id: Uuid, mut body: Document) -> Document {
    body.insert(ID_FIELD.to_string(), Value::String(id.to_string()));
    body
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertOneResult {
    pub acknowledged: bool,
    pub inserted_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResult {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_filter_all_matches_everything() {
        assert!(Filter::all().matches(Uuid::new_v4(), &Document::new()));
    }

    #[test]
    fn test_filter_by_id() {
        let id = Uuid::new_v4();
        assert!(Filter::by_id(id).matches(id, &Document::new()));
        assert!(!Filter::by_id(id).matches(Uuid::new_v4(), &Document::new()));
    }

    #[test]
    fn test_filter_fields() {
        let body = doc(json!({"email": "a@x.com", "tour_type": "hiking"}));
        let id = Uuid::new_v4();
        assert!(Filter::all().eq("email", "a@x.com").matches(id, &body));
        assert!(!Filter::all().eq("email", "b@x.com").matches(id, &body));
        assert!(!Filter::all().eq("missing", "x").matches(id, &body));
    }

    #[test]
    fn test_results_serialize_camel_case() {
        let result = UpdateResult {
            acknowledged: true,
            matched_count: 1,
            modified_count: 0,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            json!({"acknowledged": true, "matchedCount": 1, "modifiedCount": 0})
        );
    }

    #[test]
    fn test_collection_names() {
        let names: Vec<_> = Collection::ALL.iter().map(Collection::as_str).collect();
        assert_eq!(
            names,
            vec!["users", "packages", "stories", "bookings", "wishlists"]
        );
    }
}
