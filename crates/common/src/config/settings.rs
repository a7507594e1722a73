use crate::config::error::ConfigError;
use std::env;

pub const ENV_ENDPOINT: &str = "APPWRITE_ENDPOINT";
pub const ENV_PROJECT_ID: &str = "APPWRITE_PROJECT_ID";
pub const ENV_API_KEY: &str = "APPWRITE_API_KEY";
pub const ENV_DATABASE_ID: &str = "APPWRITE_DATABASE_ID";
pub const ENV_EVENTS_COLLECTION_ID: &str = "APPWRITE_EVENTS_COLLECTION_ID";

/// Connection settings for the Appwrite project, read from the environment.
///
/// All five variables are required; a missing or blank value fails at
/// startup rather than surfacing as an opaque API error on the first call.
#[derive(Debug, Clone)]
pub struct AppwriteSettings {
    /// Base URL of the Appwrite REST API, including the `/v1` suffix.
    pub endpoint: String,
    pub project_id: String,
    pub api_key: String,
    pub database_id: String,
    pub events_collection_id: String,
}

impl AppwriteSettings {
    pub fn from_env() -> Result<Self, ConfigError> {
        let endpoint = require_var(ENV_ENDPOINT)?;
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(ConfigError::invalid_endpoint(endpoint));
        }

        Ok(Self {
            // Trailing slashes would double up when request paths are joined.
            endpoint: endpoint.trim_end_matches('/').to_string(),
            project_id: require_var(ENV_PROJECT_ID)?,
            api_key: require_var(ENV_API_KEY)?,
            database_id: require_var(ENV_DATABASE_ID)?,
            events_collection_id: require_var(ENV_EVENTS_COLLECTION_ID)?,
        })
    }
}

fn require_var(name: &str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::missing_var(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::with_env;

    const ALL_SET: [(&str, Option<&str>); 5] = [
        (ENV_ENDPOINT, Some("https://cloud.appwrite.io/v1")),
        (ENV_PROJECT_ID, Some("occasionton")),
        (ENV_API_KEY, Some("standard_abc123")),
        (ENV_DATABASE_ID, Some("occasiontonDb")),
        (ENV_EVENTS_COLLECTION_ID, Some("eventsColId")),
    ];

    #[test]
    fn loads_when_all_variables_present() {
        let settings = with_env(&ALL_SET, || AppwriteSettings::from_env()).expect("should load");
        assert_eq!(settings.endpoint, "https://cloud.appwrite.io/v1");
        assert_eq!(settings.database_id, "occasiontonDb");
        assert_eq!(settings.events_collection_id, "eventsColId");
    }

    #[test]
    fn trims_trailing_slash_from_endpoint() {
        let mut vars = ALL_SET;
        vars[0] = (ENV_ENDPOINT, Some("https://appwrite.example.com/v1/"));
        let settings = with_env(&vars, || AppwriteSettings::from_env()).expect("should load");
        assert_eq!(settings.endpoint, "https://appwrite.example.com/v1");
    }

    #[test]
    fn rejects_missing_variable() {
        let mut vars = ALL_SET;
        vars[2] = (ENV_API_KEY, None);
        let err = with_env(&vars, || AppwriteSettings::from_env()).expect_err("should fail");
        assert!(matches!(err, ConfigError::MissingVar { .. }));
        assert!(err.to_string().contains(ENV_API_KEY));
    }

    #[test]
    fn rejects_blank_variable() {
        let mut vars = ALL_SET;
        vars[1] = (ENV_PROJECT_ID, Some("   "));
        let err = with_env(&vars, || AppwriteSettings::from_env()).expect_err("should fail");
        assert!(matches!(err, ConfigError::MissingVar { .. }));
    }

    #[test]
    fn rejects_non_http_endpoint() {
        let mut vars = ALL_SET;
        vars[0] = (ENV_ENDPOINT, Some("cloud.appwrite.io/v1"));
        let err = with_env(&vars, || AppwriteSettings::from_env()).expect_err("should fail");
        assert!(matches!(err, ConfigError::InvalidEndpoint { .. }));
    }
}
