//! # Endpoint configuration
//!
//! Two base URLs are involved:
//!
//! | Variable | Read | Used by |
//! |----------|------|---------|
//! | `PUBLIC_API_URL` | compile time (`option_env!`) | browser code, prefix for every request |
//! | `API_ENDPOINT` | runtime (`.env` + process env) | the fullstack server's `/api/*` rewrite |
//!
//! A blank `PUBLIC_API_URL` means "same origin": the web UI substitutes
//! `window.location.origin`, so `/api/*` requests reach the rewrite proxy.

pub const API_ENDPOINT_VAR: &str = "API_ENDPOINT";

/// Local path prefix that the server forwards to [`ProxyConfig::upstream`].
pub const PROXY_PREFIX: &str = "/api/";

/// Browser-facing API configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim().trim_end_matches('/').to_string(),
        }
    }

    /// Configuration baked in at build time.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("PUBLIC_API_URL").unwrap_or_default())
    }

    pub fn is_same_origin(&self) -> bool {
        self.base_url.is_empty()
    }

    /// Resolve a same-origin configuration against the page origin.
    pub fn with_origin(self, origin: &str) -> Self {
        if self.is_same_origin() {
            Self::new(origin)
        } else {
            self
        }
    }

    /// Absolute URL for an endpoint path such as `/api/devices`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Server-side rewrite rule: `/api/<path>` → `<upstream>/<path>`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyConfig {
    pub upstream: String,
}

impl ProxyConfig {
    pub fn new(upstream: impl Into<String>) -> Self {
        Self {
            upstream: upstream.into().trim().trim_end_matches('/').to_string(),
        }
    }

    /// Read `API_ENDPOINT` from the environment (after loading `.env`).
    #[cfg(feature = "server")]
    pub fn from_env() -> Result<Self, crate::ApiError> {
        use crate::ApiError;

        dotenvy::dotenv().ok();

        let upstream = std::env::var(API_ENDPOINT_VAR)
            .map_err(|_| ApiError::Config(format!("{API_ENDPOINT_VAR} not set")))?;
        if upstream.trim().is_empty() {
            return Err(ApiError::Config(format!("{API_ENDPOINT_VAR} is empty")));
        }
        Ok(Self::new(upstream))
    }

    /// Rewrite the part of a request path after the proxy prefix.
    pub fn rewrite(&self, path: &str, query: Option<&str>) -> String {
        let path = path.trim_start_matches('/');
        match query.filter(|q| !q.is_empty()) {
            Some(q) => format!("{}/{}?{}", self.upstream, path, q),
            None => format!("{}/{}", self.upstream, path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_config_trims_trailing_slash() {
        let config = ApiConfig::new("https://devices.example.com/ ");
        assert_eq!(config.base_url, "https://devices.example.com");
        assert_eq!(
            config.url("/api/devices"),
            "https://devices.example.com/api/devices"
        );
    }

    #[test]
    fn test_same_origin_resolves_to_page_origin() {
        let config = ApiConfig::new("").with_origin("http://localhost:8080");
        assert_eq!(config.url("/login"), "http://localhost:8080/login");

        // An explicit base wins over the page origin
        let config = ApiConfig::new("https://api.example.com").with_origin("http://localhost:8080");
        assert_eq!(config.base_url, "https://api.example.com");
    }

    #[test]
    fn test_proxy_rewrite() {
        let proxy = ProxyConfig::new("http://10.0.0.5:3000/");
        assert_eq!(proxy.rewrite("devices", None), "http://10.0.0.5:3000/devices");
        assert_eq!(
            proxy.rewrite("/book", Some("name=rover-1")),
            "http://10.0.0.5:3000/book?name=rover-1"
        );
        assert_eq!(proxy.rewrite("status", Some("")), "http://10.0.0.5:3000/status");
    }
}
