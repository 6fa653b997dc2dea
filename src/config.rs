use anyhow::{anyhow, Result};

use crate::prompts::{PromptProfile, PROFILE_NAMES};

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";

/// Process-wide settings, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub anthropic_api_key: String,
    pub anthropic_base_url: String,
    pub profile: PromptProfile,
}

impl AppConfig {
    /// Reads the environment (and `.env`, if present).
    ///
    /// A missing API key is accepted here; the upstream rejects it at request time.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = lookup("PORT")
            .and_then(|v| v.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let anthropic_api_key = lookup("ANTHROPIC_API_KEY").unwrap_or_default();

        let anthropic_base_url = lookup("ANTHROPIC_BASE_URL")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_ANTHROPIC_BASE_URL.to_string());

        let profile = match lookup("SERMON_PROMPT_PROFILE") {
            Some(name) if !name.trim().is_empty() => {
                PromptProfile::from_name(&name).ok_or_else(|| {
                    anyhow!(
                        "unknown SERMON_PROMPT_PROFILE `{}` (expected one of: {})",
                        name,
                        PROFILE_NAMES.join(", ")
                    )
                })?
            }
            _ => PromptProfile::default(),
        };

        Ok(Self {
            port,
            anthropic_api_key,
            anthropic_base_url,
            profile,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = config_from(&[]).unwrap();
        assert_eq!(cfg.port, 3001);
        assert_eq!(cfg.anthropic_api_key, "");
        assert_eq!(cfg.anthropic_base_url, "https://api.anthropic.com");
        assert_eq!(cfg.profile, PromptProfile::Balanced);
    }

    #[test]
    fn overrides_are_read() {
        let cfg = config_from(&[
            ("PORT", "8080"),
            ("ANTHROPIC_API_KEY", "sk-test"),
            ("ANTHROPIC_BASE_URL", "http://127.0.0.1:9000/"),
            ("SERMON_PROMPT_PROFILE", "compact"),
        ])
        .unwrap();
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.anthropic_api_key, "sk-test");
        assert_eq!(cfg.anthropic_base_url, "http://127.0.0.1:9000");
        assert_eq!(cfg.profile, PromptProfile::Compact);
    }

    #[test]
    fn bad_port_falls_back_to_default() {
        let cfg = config_from(&[("PORT", "not-a-port")]).unwrap();
        assert_eq!(cfg.port, DEFAULT_PORT);
    }

    #[test]
    fn unknown_profile_is_rejected() {
        let err = config_from(&[("SERMON_PROMPT_PROFILE", "verbose")]).unwrap_err();
        assert!(err.to_string().contains("verbose"));
    }
}
