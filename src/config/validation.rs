//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};

/// Minimum length for user agent.
const MIN_USER_AGENT_LENGTH: usize = 20;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_user_agent(&config.instagram.user_agent)?;
    validate_numeric("instagram.app_id", &config.instagram.app_id)?;
    validate_numeric("instagram.doc_id", &config.instagram.doc_id)?;
    validate_endpoint(&config.instagram.graphql_url)?;

    if config.ffmpeg.path.as_os_str().is_empty() {
        return Err(Error::ConfigValidation {
            field: "ffmpeg.path".to_string(),
            message: "Path to ffmpeg cannot be empty".to_string(),
        });
    }

    Ok(())
}

/// Validate the user agent string.
pub fn validate_user_agent(user_agent: &str) -> Result<()> {
    if user_agent.len() < MIN_USER_AGENT_LENGTH {
        return Err(Error::ConfigValidation {
            field: "instagram.user_agent".to_string(),
            message: format!(
                "User agent must be at least {} characters (got {})",
                MIN_USER_AGENT_LENGTH,
                user_agent.len()
            ),
        });
    }

    Ok(())
}

fn validate_numeric(field: &str, value: &str) -> Result<()> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: format!("Expected a numeric ID, got '{}'", value),
        });
    }

    Ok(())
}

/// Validate the GraphQL endpoint URL.
pub fn validate_endpoint(endpoint: &str) -> Result<()> {
    let parsed = url::Url::parse(endpoint).map_err(|e| Error::ConfigValidation {
        field: "instagram.graphql_url".to_string(),
        message: format!("'{}' is not a valid URL: {}", endpoint, e),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(Error::ConfigValidation {
            field: "instagram.graphql_url".to_string(),
            message: format!("Unsupported scheme '{}'", parsed.scheme()),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_short_user_agent() {
        assert!(validate_user_agent("curl/8").is_err());
    }

    #[test]
    fn test_non_numeric_doc_id() {
        let mut config = Config::default();
        config.instagram.doc_id = "abc".into();
        match validate_config(&config) {
            Err(Error::ConfigValidation { field, .. }) => assert_eq!(field, "instagram.doc_id"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_endpoint_scheme() {
        assert!(validate_endpoint("https://www.instagram.com/graphql/query/").is_ok());
        assert!(validate_endpoint("ftp://www.instagram.com/").is_err());
        assert!(validate_endpoint("not a url").is_err());
    }

    #[test]
    fn test_empty_ffmpeg_path() {
        let mut config = Config::default();
        config.ffmpeg.path = PathBuf::new();
        assert!(validate_config(&config).is_err());
    }
}
