use crate::utils::error::{Result, ViewerError};
use crate::utils::validation::{validate_non_empty_string, validate_socket_addr, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub server: Option<ServerSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    pub bind: Option<String>,
    pub title: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ViewerError::ConfigError {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ViewerError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ViewerError::ConfigError {
            message: format!("bad substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        let Some(server) = &self.server else {
            return Ok(());
        };

        if let Some(bind) = &server.bind {
            validate_socket_addr("server.bind", bind)?;
        }
        if let Some(title) = &server.title {
            validate_non_empty_string("server.title", title)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_server_section() {
        let toml_content = r#"
[server]
bind = "0.0.0.0:8080"
title = "Dashboard"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let server = config.server.as_ref().unwrap();

        assert_eq!(server.bind.as_deref(), Some("0.0.0.0:8080"));
        assert_eq!(server.title.as_deref(), Some("Dashboard"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_is_valid() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.server.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("HTML_VIEWER_TEST_PORT", "9123");

        let config = TomlConfig::from_toml_str(
            r#"
[server]
bind = "127.0.0.1:${HTML_VIEWER_TEST_PORT}"
"#,
        )
        .unwrap();
        assert_eq!(
            config.server.unwrap().bind.as_deref(),
            Some("127.0.0.1:9123")
        );

        std::env::remove_var("HTML_VIEWER_TEST_PORT");
    }

    #[test]
    fn test_unset_env_var_is_left_alone() {
        let config = TomlConfig::from_toml_str(
            r#"
[server]
title = "${HTML_VIEWER_SURELY_UNSET}"
"#,
        )
        .unwrap();

        assert_eq!(
            config.server.unwrap().title.as_deref(),
            Some("${HTML_VIEWER_SURELY_UNSET}")
        );
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let err = TomlConfig::from_toml_str(
            r#"
[server]
height = 1200
"#,
        )
        .unwrap_err();

        assert!(matches!(err, ViewerError::ConfigError { .. }));
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
[server]
bind = "nowhere"
"#,
        )
        .unwrap();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[server]\ntitle = \"File test\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.server.unwrap().title.as_deref(), Some("File test"));
    }

    #[test]
    fn test_missing_config_file() {
        let err = TomlConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ViewerError::ConfigError { .. }));
    }
}
