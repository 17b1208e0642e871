//! Backend endpoint configuration.

/// Base URLs for the backend services.
///
/// The catalog, address, and user endpoints live on one service; order
/// placement runs on a separate one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Catalog / address / user service base URL.
    pub api_base: String,
    /// Order service base URL.
    pub orders_base: String,
}

impl BackendConfig {
    /// Create a config with explicit base URLs.
    pub fn new(api_base: impl Into<String>, orders_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            orders_base: orders_base.into(),
        }
    }
}

impl Default for BackendConfig {
    /// Local development defaults.
    fn default() -> Self {
        Self::new("http://localhost:5000", "http://localhost:5001")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BackendConfig::default();
        assert_eq!(config.api_base, "http://localhost:5000");
        assert_eq!(config.orders_base, "http://localhost:5001");
    }
}
