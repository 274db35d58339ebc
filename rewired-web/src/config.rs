//! Frontend configuration module
//!
//! This module provides configuration for API endpoints and external
//! integrations, resolved at build time.

/// Frontend configuration for URLs and external integrations
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Base URL of the storefront API
    pub api_base_url: String,
    /// Google Identity Services client id, when Google sign-in is enabled
    pub google_client_id: Option<String>,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("REWIRED_API_URL").unwrap_or("/api").to_string(),
            google_client_id: option_env!("REWIRED_GOOGLE_CLIENT_ID").map(str::to_string),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the API base URL
    #[must_use]
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Get the Google client id, when one was configured at build time
    #[must_use]
    pub fn google_client_id(&self) -> Option<&str> {
        self.google_client_id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_config_default() {
        let config = FrontendConfig::default();
        assert!(!config.api_base_url.is_empty());
    }

    #[test]
    fn test_frontend_config_new() {
        let config = FrontendConfig::new();
        assert_eq!(config.api_base_url(), config.api_base_url);
    }

    #[test]
    fn google_sign_in_is_off_without_a_client_id() {
        let config = FrontendConfig {
            api_base_url: "/api".to_string(),
            google_client_id: None,
        };
        assert!(config.google_client_id().is_none());
    }
}
