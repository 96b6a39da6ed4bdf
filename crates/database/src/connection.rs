use crate::error::DbError;
use configuration::DatabaseSettings;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;
use std::str::FromStr;
use std::time::Duration;

const MAX_CONNECTIONS: u32 = 10;
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Translates the settings into driver connect options.
pub fn connect_options(settings: &DatabaseSettings) -> Result<PgConnectOptions, DbError> {
    let ssl_mode = PgSslMode::from_str(&settings.ssl_mode)
        .map_err(|e| DbError::ConnectionConfigError(e.to_string()))?;

    Ok(PgConnectOptions::new()
        .host(&settings.host)
        .port(settings.port)
        .username(&settings.username)
        .password(&settings.password)
        .database(&settings.name)
        .ssl_mode(ssl_mode))
}

/// Establishes a connection pool to the PostgreSQL database.
///
/// The pool is created eagerly, so an unreachable server is reported here
/// rather than on the first request. It is cheap to clone and is shared by
/// every repository.
pub async fn connect(settings: &DatabaseSettings) -> Result<PgPool, DbError> {
    let options = connect_options(settings)?;

    tracing::info!(host = %settings.host, port = settings.port, database = %settings.name, "Connecting to PostgreSQL.");
    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_with(options)
        .await?;

    Ok(pool)
}
