use std::path::PathBuf;

pub const ENV_PLANS_FILE: &str = "PORTAL_PLANS_FILE";
pub const ENV_LOG: &str = "PORTAL_LOG";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Runtime settings, read once at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortalConfig {
    /// JSON array of plan rows used instead of the bundled mock data.
    pub plans_file: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            plans_file: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl PortalConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            plans_file: non_empty(ENV_PLANS_FILE).map(PathBuf::from),
            log_filter: non_empty(ENV_LOG).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }
}
