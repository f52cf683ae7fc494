/// Compile-time environment key holding the backend origin, e.g. `http://localhost:8000`.
pub const API_BASE_KEY: &str = "ACTIVITIES_API_BASE";
pub const DEFAULT_MESSAGE_TIMEOUT_MS: u32 = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for every endpoint path. Empty means same origin.
    pub api_base: String,
    /// How long a status message stays on screen.
    pub message_timeout_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            api_base: String::new(),
            message_timeout_ms: DEFAULT_MESSAGE_TIMEOUT_MS,
        }
    }
}

impl ClientConfig {
    pub fn from_api_base(api_base: Option<&str>) -> Self {
        let api_base = api_base
            .map(|base| base.trim().trim_end_matches('/').to_string())
            .unwrap_or_default();
        ClientConfig {
            api_base,
            ..ClientConfig::default()
        }
    }

    /// An absolute base names another origin; an empty or path-only base
    /// stays on the page's own.
    pub fn is_cross_origin(&self) -> bool {
        ["http://", "https://", "//"]
            .iter()
            .any(|scheme| self.api_base.starts_with(scheme))
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}
