use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use serde::{Deserialize, Serialize};

pub const CONFIG_VERSION: u64 = 1;

fn default_base_url() -> String {
    "https://todo-backendd-hdpm.onrender.com/api/v1/tasks".to_string()
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, CosmicConfigEntry)]
pub struct TallyConfig {
    /// Theme flag, read once at startup and written on every toggle.
    pub dark_mode: bool,
    /// Base URL of the tasks collection, without trailing slash.
    pub api_base_url: String,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            dark_mode: false,
            api_base_url: default_base_url(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_light_mode() {
        let config = TallyConfig::default();
        assert!(!config.dark_mode);
    }

    #[test]
    fn default_base_url_has_no_trailing_slash() {
        let config = TallyConfig::default();
        assert_eq!(
            config.api_base_url,
            "https://todo-backendd-hdpm.onrender.com/api/v1/tasks"
        );
    }
}
