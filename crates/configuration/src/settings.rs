use crate::error::ConfigError;
use serde::Deserialize;
use std::fmt;
use std::net::{Ipv4Addr, SocketAddr};

/// SSL modes understood by the PostgreSQL driver.
pub const SSL_MODES: [&str; 6] = ["disable", "allow", "prefer", "require", "verify-ca", "verify-full"];

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub server: ServerSettings,
}

/// Where and how to reach PostgreSQL.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub username: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    /// The database name (`dbname` in a libpq connection string).
    pub name: String,
    /// One of [`SSL_MODES`]. Defaults to `require`.
    pub ssl_mode: String,
}

/// The HTTP listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub port: u16,
}

impl ServerSettings {
    /// Listens on every interface.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

impl fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("ssl_mode", &self.ssl_mode)
            .finish()
    }
}

/// The environment as the `config` crate sees it: every variable name
/// lowercased, no nesting.
#[derive(Debug, Deserialize)]
pub(crate) struct EnvSettings {
    database_username: String,
    database_password: String,
    database_host: String,
    database_port: u16,
    database_name: String,
    database_ssl_mode: String,
    port: u16,
}

impl From<EnvSettings> for Settings {
    fn from(env: EnvSettings) -> Self {
        Self {
            database: DatabaseSettings {
                username: env.database_username,
                password: env.database_password,
                host: env.database_host,
                port: env.database_port,
                name: env.database_name,
                ssl_mode: env.database_ssl_mode.to_lowercase(),
            },
            server: ServerSettings { port: env.port },
        }
    }
}

impl Settings {
    /// Rejects values that would only fail later, at connect time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let db = &self.database;
        for (var, value) in [
            ("DATABASE_USERNAME", &db.username),
            ("DATABASE_HOST", &db.host),
            ("DATABASE_NAME", &db.name),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationError(format!("{var} must not be empty")));
            }
        }
        if !SSL_MODES.contains(&db.ssl_mode.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "DATABASE_SSL_MODE must be one of {}, got '{}'",
                SSL_MODES.join(", "),
                db.ssl_mode
            )));
        }
        Ok(())
    }
}
