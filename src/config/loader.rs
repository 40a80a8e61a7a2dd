//! Configuration loading from disk and the command line.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::schema::EchoConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Command line for the `echo-server` binary.
///
/// Every flag can also be supplied through the environment. Log settings use
/// the `LOGS_` prefix.
#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "echo-server",
    version,
    about = "Diagnostic HTTP server that reflects requests back to the caller"
)]
pub struct CliArgs {
    /// Optional TOML configuration file.
    ///
    /// Environment variable: `ECHO_CONFIG`
    #[arg(long, env = "ECHO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log verbosity (trace, debug, info, warn, error).
    ///
    /// Environment variable: `LOGS_LEVEL`
    #[arg(long, env = "LOGS_LEVEL")]
    pub log_level: Option<String>,

    /// Log output format ("json" or text).
    ///
    /// Environment variable: `LOGS_FORMAT`
    #[arg(long, env = "LOGS_FORMAT")]
    pub log_format: Option<String>,

    /// Address to listen on.
    ///
    /// Environment variable: `ECHO_BIND_ADDRESS`
    #[arg(long, env = "ECHO_BIND_ADDRESS")]
    pub bind_address: Option<String>,
}

/// Load configuration from a TOML file without validating it.
pub fn read_config(path: &Path) -> Result<EchoConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<EchoConfig, ConfigError> {
    let config = read_config(path)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Resolve the effective configuration: defaults, then the file named by
/// `--config`, then individual flags / environment variables.
pub fn resolve_config(args: &CliArgs) -> Result<EchoConfig, ConfigError> {
    let mut config = match &args.config {
        Some(path) => read_config(path)?,
        None => EchoConfig::default(),
    };

    if let Some(level) = &args.log_level {
        config.logs.level = level.clone();
    }
    if let Some(format) = &args.log_format {
        config.logs.format = format.clone();
    }
    if let Some(addr) = &args.bind_address {
        config.listener.bind_address = addr.clone();
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_toml(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_resolve_defaults() {
        let config = resolve_config(&CliArgs::default()).unwrap();
        assert_eq!(config, EchoConfig::default());
    }

    #[test]
    fn test_flags_override_file() {
        let file = write_toml(
            r#"
            [logs]
            level = "info"
            format = "text"

            [listener]
            bind_address = "127.0.0.1:9000"
            "#,
        );
        let args = CliArgs {
            config: Some(file.path().to_path_buf()),
            log_level: Some("warn".into()),
            ..Default::default()
        };

        let config = resolve_config(&args).unwrap();
        assert_eq!(config.logs.level, "warn");
        assert_eq!(config.logs.format, "text");
        assert_eq!(config.listener.bind_address, "127.0.0.1:9000");
    }

    #[test]
    fn test_invalid_level_is_fatal() {
        let args = CliArgs {
            log_level: Some("chatty".into()),
            ..Default::default()
        };
        match resolve_config(&args) {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors, vec![ValidationError::LogLevel("chatty".into())]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_config_rejects_bad_toml() {
        let file = write_toml("[logs\nlevel = ");
        assert!(matches!(
            load_config(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = load_config(Path::new("/nonexistent/echo-server.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_cli_parses_flags() {
        let args = CliArgs::parse_from([
            "echo-server",
            "--log-level",
            "trace",
            "--bind-address",
            "127.0.0.1:0",
        ]);
        assert_eq!(args.log_level.as_deref(), Some("trace"));
        assert_eq!(args.bind_address.as_deref(), Some("127.0.0.1:0"));
    }
}
