use crate::utils::error::{ContentError, Result};
use serde::{Deserialize, Serialize};

/// API version used when the environment does not pin one.
pub const DEFAULT_API_VERSION: &str = "2024-06-01";

const MISSING_ENV_MESSAGE: &str = "Missing Sanity env";

/// Connection values as the environment supplies them. Everything is
/// optional here; presence of the required values is enforced by
/// [`build_sanity_config`]. Core logic never reads process state itself:
/// the outermost entry point constructs one of these and passes it down.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SanityEnv {
    pub project_id: Option<String>,
    pub dataset: Option<String>,
    pub api_version: Option<String>,
    /// Whether to query the CDN-backed API host. Defaults to `true`; the
    /// deployment layer decides otherwise.
    pub use_cdn: Option<bool>,
}

impl SanityEnv {
    pub fn new(project_id: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self {
            project_id: Some(project_id.into()),
            dataset: Some(dataset.into()),
            api_version: None,
            use_cdn: None,
        }
    }
}

/// The connection contract the CMS client expects. Total: every field is
/// validated or defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanityConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    pub use_cdn: bool,
}

/// Validates the environment-derived values and assembles the client
/// configuration. Project id and dataset are required; a missing or empty
/// value is a configuration error. Pure function of its input.
pub fn build_sanity_config(env: &SanityEnv) -> Result<SanityConfig> {
    let project_id = required(&env.project_id)?;
    let dataset = required(&env.dataset)?;
    let api_version = env
        .api_version
        .clone()
        .unwrap_or_else(|| DEFAULT_API_VERSION.to_string());

    Ok(SanityConfig {
        project_id,
        dataset,
        api_version,
        use_cdn: env.use_cdn.unwrap_or(true),
    })
}

fn required(value: &Option<String>) -> Result<String> {
    value
        .as_deref()
        .filter(|value| !value.trim().is_empty())
        .map(str::to_string)
        .ok_or_else(|| ContentError::Config {
            message: MISSING_ENV_MESSAGE.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_ok() -> SanityEnv {
        SanityEnv {
            project_id: Some("demo".to_string()),
            dataset: Some("production".to_string()),
            api_version: Some("2024-06-01".to_string()),
            use_cdn: None,
        }
    }

    #[test]
    fn test_builds_config_from_env() {
        let config = build_sanity_config(&env_ok()).unwrap();
        assert_eq!(config.project_id, "demo");
        assert_eq!(config.dataset, "production");
        assert_eq!(config.api_version, "2024-06-01");
    }

    #[test]
    fn test_fails_when_required_env_missing() {
        let err = build_sanity_config(&SanityEnv::default()).unwrap_err();
        match err {
            ContentError::Config { message } => assert_eq!(message, "Missing Sanity env"),
            other => panic!("expected configuration error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_strings_count_as_missing() {
        let env = SanityEnv {
            project_id: Some(String::new()),
            dataset: Some("production".to_string()),
            ..SanityEnv::default()
        };
        assert!(build_sanity_config(&env).is_err());
    }

    #[test]
    fn test_api_version_defaults_when_unset() {
        let config = build_sanity_config(&SanityEnv::new("demo", "production")).unwrap();
        assert_eq!(config.api_version, DEFAULT_API_VERSION);
    }

    #[test]
    fn test_use_cdn_defaults_to_true() {
        let config = build_sanity_config(&SanityEnv::new("demo", "production")).unwrap();
        assert!(config.use_cdn);
    }

    #[test]
    fn test_use_cdn_can_be_disabled() {
        let env = SanityEnv {
            use_cdn: Some(false),
            ..SanityEnv::new("demo", "production")
        };
        let config = build_sanity_config(&env).unwrap();
        assert!(!config.use_cdn);
    }
}
