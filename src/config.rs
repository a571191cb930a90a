use std::env;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Top-level application configuration loaded from file + environment.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub http: HttpSection,
    pub logging: LoggingSection,
}

impl AppConfig {
    /// Load configuration from disk and environment.
    ///
    /// The file named by `ITEMDESK_CONFIG` (default `config.toml`) is optional;
    /// `ITEMDESK_*` variables override it.
    pub fn load() -> Result<Self> {
        let config_path =
            env::var("ITEMDESK_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let mut builder = config::Config::builder();

        if Path::new(&config_path).exists() {
            builder = builder.add_source(config::File::from(PathBuf::from(&config_path)));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("ITEMDESK")
                .separator("_")
                .try_parsing(true),
        );

        let settings = builder.build()?;
        Self::finish(settings.try_deserialize()?)
    }

    /// Load configuration from a single file, ignoring the environment.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let settings = config::Config::builder()
            .add_source(config::File::from(path.to_path_buf()))
            .build()
            .with_context(|| format!("failed to read config file {}", path.display()))?;

        Self::finish(settings.try_deserialize()?)
    }

    fn finish(mut config: Self) -> Result<Self> {
        if config.logging.level.trim().is_empty() {
            config.logging.level = "info".to_string();
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            bail!("server.host must be specified");
        }
        if self.server.port == 0 {
            bail!("server.port must be non-zero");
        }
        Ok(())
    }

    /// Address the HTTP listener binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpSection {
    /// Allow any origin, method and header
    pub cors: bool,
    /// Directory served under `/static`
    pub assets: PathBuf,
}

impl Default for HttpSection {
    fn default() -> Self {
        Self {
            cors: true,
            assets: PathBuf::from("static"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Text,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
        assert!(config.http.cors);
        assert_eq!(config.http.assets, PathBuf::from("static"));
        assert_eq!(config.logging.format, LogFormat::Text);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_port_rejected() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_level_defaults_to_info() {
        let mut config = AppConfig::default();
        config.logging.level = "  ".to_string();
        let config = AppConfig::finish(config).unwrap();
        assert_eq!(config.logging.level, "info");
    }
}
