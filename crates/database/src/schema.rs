use crate::error::DbError;
use core_types::ResourceKind;
use sqlx::PgPool;

/// Renders the `CREATE TABLE IF NOT EXISTS` statement for one resource.
pub fn create_table_sql(kind: ResourceKind) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {table} (
            {id} SERIAL PRIMARY KEY,
            {name} VARCHAR(100) NOT NULL,
            {price} INTEGER NOT NULL
        )",
        table = kind.table(),
        id = kind.id_column(),
        name = kind.name_column(),
        price = kind.price_column(),
    )
}

/// Makes sure every resource table exists. Safe to run on every startup.
///
/// Stops at the first table that cannot be created and reports which one.
/// Whether that is fatal is the caller's decision.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), DbError> {
    for kind in ResourceKind::ALL {
        sqlx::query(&create_table_sql(kind))
            .execute(pool)
            .await
            .map_err(|source| DbError::SchemaError { table: kind.table(), source })?;
        tracing::debug!(table = kind.table(), "Table ready.");
    }
    tracing::info!("Database schema is up to date.");
    Ok(())
}
