use crate::error::ConfigError;
use crate::settings::EnvSettings;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{DatabaseSettings, ServerSettings, Settings, SSL_MODES};

pub const DEFAULT_DATABASE_PORT: u16 = 5432;
pub const DEFAULT_SSL_MODE: &str = "require";
pub const DEFAULT_PORT: u16 = 8080;

/// Loads the application settings from the process environment.
///
/// Reads `DATABASE_USERNAME`, `DATABASE_PASSWORD`, `DATABASE_HOST`,
/// `DATABASE_PORT`, `DATABASE_NAME`, `DATABASE_SSL_MODE` and `PORT`. Callers
/// that want a `.env` file honoured should load it before calling this.
pub fn load_settings() -> Result<Settings, ConfigError> {
    load_from(config::Environment::default())
}

/// Same as [`load_settings`], but reads variables from `vars` instead of the
/// process environment.
pub fn load_settings_from(vars: config::Map<String, String>) -> Result<Settings, ConfigError> {
    load_from(config::Environment::default().source(Some(vars)))
}

fn load_from(environment: config::Environment) -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        .set_default("database_port", i64::from(DEFAULT_DATABASE_PORT))?
        .set_default("database_ssl_mode", DEFAULT_SSL_MODE)?
        .set_default("port", i64::from(DEFAULT_PORT))?
        .add_source(environment)
        .build()?;

    let env = builder.try_deserialize::<EnvSettings>()?;
    let settings = Settings::from(env);
    settings.validate()?;

    tracing::debug!(database = ?settings.database, port = settings.server.port, "Settings loaded.");
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> config::Map<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    fn required() -> Vec<(&'static str, &'static str)> {
        vec![
            ("DATABASE_USERNAME", "depot"),
            ("DATABASE_PASSWORD", "s3cret"),
            ("DATABASE_HOST", "db.internal"),
            ("DATABASE_NAME", "depot"),
        ]
    }

    #[test]
    fn applies_defaults_for_optional_variables() {
        let settings = load_settings_from(vars(&required())).unwrap();
        assert_eq!(settings.database.port, DEFAULT_DATABASE_PORT);
        assert_eq!(settings.database.ssl_mode, "require");
        assert_eq!(settings.server.port, DEFAULT_PORT);
        assert_eq!(settings.database.host, "db.internal");
    }

    #[test]
    fn reads_ports_and_ssl_mode() {
        let mut pairs = required();
        pairs.extend([("DATABASE_PORT", "6543"), ("DATABASE_SSL_MODE", "Disable"), ("PORT", "3000")]);
        let settings = load_settings_from(vars(&pairs)).unwrap();
        assert_eq!(settings.database.port, 6543);
        assert_eq!(settings.database.ssl_mode, "disable");
        assert_eq!(settings.server.socket_addr().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn numeric_password_stays_a_string() {
        let mut pairs = required();
        pairs.retain(|(k, _)| *k != "DATABASE_PASSWORD");
        pairs.push(("DATABASE_PASSWORD", "123456"));
        let settings = load_settings_from(vars(&pairs)).unwrap();
        assert_eq!(settings.database.password, "123456");
    }

    #[test]
    fn missing_host_is_a_load_error() {
        let mut pairs = required();
        pairs.retain(|(k, _)| *k != "DATABASE_HOST");
        let err = load_settings_from(vars(&pairs)).unwrap_err();
        assert!(matches!(err, ConfigError::LoadError(_)));
    }

    #[test]
    fn unknown_ssl_mode_is_rejected() {
        let mut pairs = required();
        pairs.push(("DATABASE_SSL_MODE", "always"));
        let err = load_settings_from(vars(&pairs)).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn empty_database_name_is_rejected() {
        let mut pairs = required();
        pairs.retain(|(k, _)| *k != "DATABASE_NAME");
        pairs.push(("DATABASE_NAME", " "));
        let err = load_settings_from(vars(&pairs)).unwrap_err();
        assert!(err.to_string().contains("DATABASE_NAME"));
    }

    #[test]
    fn debug_output_hides_the_password() {
        let settings = load_settings_from(vars(&required())).unwrap();
        let printed = format!("{:?}", settings);
        assert!(!printed.contains("s3cret"));
        assert!(printed.contains("<redacted>"));
    }
}
