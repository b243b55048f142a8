pub mod toml_config;

use crate::adapters::iframe::DEFAULT_TITLE;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_socket_addr};
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::utils::validation::Validate;

pub const DEFAULT_BIND: SocketAddr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 8501));

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "html-viewer")]
#[command(about = "Serve ./index.html inside an embedded viewer (800px, scrolling)")]
pub struct CliConfig {
    /// Address the host page is served on [default: 127.0.0.1:8501]
    #[arg(long)]
    pub bind: Option<String>,

    /// Title of the host page [default: HTML Viewer]
    #[arg(long)]
    pub title: Option<String>,

    /// TOML file with a [server] table
    #[arg(long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Resolves host settings: command line, then config file, then defaults.
    pub fn settings(&self) -> Result<ServerSettings> {
        let file = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                Some(TomlConfig::from_file(path)?)
            }
            None => None,
        };

        ServerSettings::from_sources(file.as_ref(), self.bind.as_deref(), self.title.as_deref())
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            crate::utils::validation::validate_path("--config", path)?;
        }
        if let Some(bind) = &self.bind {
            validate_socket_addr("--bind", bind)?;
        }
        if let Some(title) = &self.title {
            validate_non_empty_string("--title", title)?;
        }
        Ok(())
    }
}

/// Resolved settings for the viewer host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub bind: SocketAddr,
    pub title: String,
}

impl ServerSettings {
    pub fn from_sources(
        file: Option<&TomlConfig>,
        bind: Option<&str>,
        title: Option<&str>,
    ) -> Result<Self> {
        let section = file.and_then(|f| f.server.as_ref());

        // Errors name the setting the value came from.
        let bind = match (bind, section.and_then(|s| s.bind.as_deref())) {
            (Some(addr), _) => validate_socket_addr("--bind", addr)?,
            (None, Some(addr)) => validate_socket_addr("server.bind", addr)?,
            (None, None) => DEFAULT_BIND,
        };
        let title = match (title, section.and_then(|s| s.title.as_deref())) {
            (Some(title), _) => Self::checked_title("--title", title)?,
            (None, Some(title)) => Self::checked_title("server.title", title)?,
            (None, None) => DEFAULT_TITLE,
        };

        Ok(Self {
            bind,
            title: title.to_string(),
        })
    }

    fn checked_title<'a>(field: &str, title: &'a str) -> Result<&'a str> {
        validate_non_empty_string(field, title)?;
        Ok(title)
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_sources() {
        let settings = ServerSettings::from_sources(None, None, None).unwrap();
        assert_eq!(settings, ServerSettings::default());
        assert_eq!(settings.bind.to_string(), "127.0.0.1:8501");
    }

    #[test]
    fn test_command_line_overrides_file() {
        let file = TomlConfig::from_toml_str(
            r#"
[server]
bind = "0.0.0.0:9000"
title = "From file"
"#,
        )
        .unwrap();

        let settings =
            ServerSettings::from_sources(Some(&file), Some("127.0.0.1:7000"), None).unwrap();

        assert_eq!(settings.bind.port(), 7000);
        assert_eq!(settings.title, "From file");
    }

    fn invalid_field(err: crate::utils::error::ViewerError) -> String {
        match err {
            crate::utils::error::ViewerError::InvalidConfigValueError { field, .. } => field,
            other => panic!("expected InvalidConfigValueError, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_command_line_bind_names_flag() {
        let err = ServerSettings::from_sources(None, Some("not-an-address"), None).unwrap_err();
        assert_eq!(invalid_field(err), "--bind");
    }

    #[test]
    fn test_invalid_file_bind_names_table_key() {
        let file = TomlConfig::from_toml_str("[server]\nbind = \"nowhere\"\n").unwrap();

        let err = ServerSettings::from_sources(Some(&file), None, None).unwrap_err();
        assert_eq!(invalid_field(err), "server.bind");
    }

    #[test]
    fn test_command_line_bind_shadows_bad_file_bind() {
        let file = TomlConfig::from_toml_str("[server]\nbind = \"nowhere\"\n").unwrap();

        let settings =
            ServerSettings::from_sources(Some(&file), Some("127.0.0.1:7001"), None).unwrap();
        assert_eq!(settings.bind.port(), 7001);
    }

    #[test]
    fn test_blank_title_is_rejected() {
        let err = ServerSettings::from_sources(None, None, Some("  ")).unwrap_err();
        assert_eq!(invalid_field(err), "--title");

        let file = TomlConfig::from_toml_str("[server]\ntitle = \"\"\n").unwrap();
        let err = ServerSettings::from_sources(Some(&file), None, None).unwrap_err();
        assert_eq!(invalid_field(err), "server.title");
    }
}
