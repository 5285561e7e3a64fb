use crate::env_var;

/// Origins the browser may call the API from, read from `ALLOWED_ORIGINS`
/// as a comma-separated list.
///
/// Without it only the local dev front ends on `localhost:5173` and
/// `localhost:5000` are allowed. Deployments serving a public site must set
/// `ALLOWED_ORIGINS` to that site's origin.
#[derive(Clone, Debug)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn from_env() -> Self {
        Self::from_vars(env_var)
    }

    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173,http://localhost:5000".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Self { allowed_origins }
    }
}
