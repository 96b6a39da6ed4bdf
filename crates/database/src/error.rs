use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Invalid database connection settings: {0}")]
    ConnectionConfigError(String),

    #[error("Database operation failed: {0}")]
    ConnectionError(#[from] sqlx::Error),

    #[error("Failed to create table '{table}': {source}")]
    SchemaError {
        table: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("A row in '{table}' could not be decoded: {reason}")]
    DecodeError { table: &'static str, reason: String },
}
