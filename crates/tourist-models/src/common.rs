use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every error response, and of a few plain acknowledgements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "forbidden access")]
    pub message: String,
}
