use serde::Deserialize;
use utoipa::IntoParams;

/// Optional owner filter for bookings and wishlists.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmailQuery {
    pub email: Option<String>,
}

impl EmailQuery {
    /// An empty `?email=` is treated as no filter.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref().filter(|e| !e.is_empty())
    }
}
