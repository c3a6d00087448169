/// Runtime configuration of the roster page
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the roster API, without a trailing slash
    pub api_base_url: String,
}

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

impl AppConfig {
    /// Build from compile-time environment. `ROSTER_API_URL` overrides the API location.
    pub fn from_env() -> Self {
        Self::with_api_base_url(option_env!("ROSTER_API_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    pub fn with_api_base_url(base_url: &str) -> Self {
        Self {
            api_base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_api_base_url(DEFAULT_API_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_dropped() {
        let config = AppConfig::with_api_base_url("https://roster.example.org/ ");
        assert_eq!(config.api_base_url, "https://roster.example.org");
    }

    #[test]
    fn test_default_points_at_localhost() {
        assert_eq!(AppConfig::default().api_base_url, "http://localhost:3000");
    }
}
