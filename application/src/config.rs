//! [`Config`]-related definitions.

use std::time;

use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use secrecy::SecretString;
use serde::Deserialize;
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: Server,

    /// Clinic backend configuration.
    pub backend: Backend,

    /// Log configuration.
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Server configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Server {
    /// Host to bind the server to.
    #[default("0.0.0.0".to_owned())]
    pub host: String,

    /// Port to bind the server to.
    #[default(8080)]
    pub port: u16,

    /// [CORS] configuration.
    ///
    /// [CORS]: https://developer.mozilla.org/en-US/docs/Web/HTTP/CORS
    pub cors: Cors,
}

/// [CORS] configuration.
///
/// [CORS]: https://developer.mozilla.org/en-US/docs/Web/HTTP/CORS
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Cors {
    /// List of allowed origins.
    #[default(vec!["*".to_owned()])]
    pub origins: Vec<String>,
}

/// Clinic backend configuration.
#[derive(Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Backend {
    /// Base URL of the clinic backend REST API.
    #[default("http://127.0.0.1:3000/api".to_owned())]
    pub url: String,

    /// Bearer token to authorize the backend requests with.
    pub token: Option<SecretString>,

    /// Timeout of a single backend request.
    #[default(time::Duration::from_secs(10))]
    #[serde(with = "humantime_serde")]
    pub timeout: time::Duration,
}

impl From<Backend> for service::infra::rest::Config {
    fn from(value: Backend) -> Self {
        let Backend {
            url,
            token,
            timeout,
        } = value;
        Self {
            url,
            token,
            timeout,
        }
    }
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

#[cfg(test)]
mod spec {
    use std::{fs, time};

    use secrecy::ExposeSecret as _;

    use super::{Config, LogLevel};

    #[test]
    fn uses_defaults_without_file() {
        let conf = Config::new("non-existent-config").unwrap();

        assert_eq!(conf.server.host, "0.0.0.0");
        assert_eq!(conf.server.port, 8080);
        assert_eq!(conf.server.cors.origins, ["*"]);
        assert_eq!(conf.backend.url, "http://127.0.0.1:3000/api");
        assert!(conf.backend.token.is_none());
        assert_eq!(conf.backend.timeout, time::Duration::from_secs(10));
        assert_eq!(conf.log.level, LogLevel::Info);
    }

    #[test]
    fn overrides_defaults_from_file() {
        let path = std::env::temp_dir()
            .join(format!("schedule-config-{}.toml", std::process::id()));
        fs::write(
            &path,
            r#"
                [server]
                port = 9000

                [backend]
                url = "https://clinic.example.com/api/"
                token = "s3cr3t"
                timeout = "2s 500ms"

                [log]
                level = "DEBUG"
            "#,
        )
        .unwrap();

        let conf = Config::new(path.to_string_lossy());
        fs::remove_file(&path).unwrap();
        let conf = conf.unwrap();

        assert_eq!(conf.server.host, "0.0.0.0");
        assert_eq!(conf.server.port, 9000);
        assert_eq!(conf.backend.url, "https://clinic.example.com/api/");
        assert_eq!(
            conf.backend.token.as_ref().map(|t| t.expose_secret().to_owned()),
            Some("s3cr3t".to_owned()),
        );
        assert_eq!(conf.backend.timeout, time::Duration::from_millis(2500));
        assert_eq!(conf.log.level, LogLevel::Debug);
        assert_eq!(tracing::Level::from(conf.log.level), tracing::Level::DEBUG);
    }
}
