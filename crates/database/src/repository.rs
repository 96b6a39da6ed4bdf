use crate::DbError;
use crate::memory::MemoryRepository;
use async_trait::async_trait;
use core_types::{NewRecord, Record, ResourceKind};
use sqlx::postgres::PgPool;
use sqlx::Row;
use std::sync::Arc;

/// Storage operations for a single resource type.
///
/// Every method is one statement against one table. There is no update, and
/// `delete_by_id` succeeds whether or not a row matched.
#[async_trait]
pub trait ResourceRepository: Send + Sync + 'static {
    /// The resource this repository stores.
    fn kind(&self) -> ResourceKind;

    /// Every row, oldest id first. An empty table yields an empty vec.
    async fn list_all(&self) -> Result<Vec<Record>, DbError>;

    /// Inserts a row and returns the id storage assigned to it.
    async fn insert(&self, new: &NewRecord) -> Result<i32, DbError>;

    /// Deletes the row with `id`, returning how many rows went away (0 or 1).
    async fn delete_by_id(&self, id: i32) -> Result<u64, DbError>;
}

/// The SQL for one table, rendered once at construction.
#[derive(Debug, Clone)]
struct Statements {
    select_all: String,
    insert: String,
    delete: String,
}

impl Statements {
    fn for_kind(kind: ResourceKind) -> Self {
        let (table, id, name, price) =
            (kind.table(), kind.id_column(), kind.name_column(), kind.price_column());
        Self {
            select_all: format!("SELECT {id}, {name}, {price} FROM {table} ORDER BY {id}"),
            insert: format!("INSERT INTO {table} ({name}, {price}) VALUES ($1, $2) RETURNING {id}"),
            delete: format!("DELETE FROM {table} WHERE {id} = $1"),
        }
    }
}

/// PostgreSQL-backed repository for one resource table.
#[derive(Debug, Clone)]
pub struct PgResourceRepository {
    pool: PgPool,
    kind: ResourceKind,
    sql: Statements,
}

impl PgResourceRepository {
    /// Creates a repository over a shared connection pool.
    pub fn new(pool: PgPool, kind: ResourceKind) -> Self {
        Self { pool, kind, sql: Statements::for_kind(kind) }
    }
}

#[async_trait]
impl ResourceRepository for PgResourceRepository {
    fn kind(&self) -> ResourceKind {
        self.kind
    }

    async fn list_all(&self) -> Result<Vec<Record>, DbError> {
        let rows = sqlx::query(&self.sql.select_all).fetch_all(&self.pool).await?;

        let table = self.kind.table();
        rows.into_iter()
            .map(|row| -> Result<Record, DbError> {
                let id: i32 = row.try_get(0)?;
                let name: String = row.try_get(1)?;
                let price: i32 = row.try_get(2)?;
                Record::from_stored(id, name, price)
                    .map_err(|e| DbError::DecodeError { table, reason: e.to_string() })
            })
            .collect()
    }

    async fn insert(&self, new: &NewRecord) -> Result<i32, DbError> {
        // INTEGER column; values past i32::MAX are refused by the server.
        let id: i32 = sqlx::query_scalar(&self.sql.insert)
            .bind(&new.name)
            .bind(i64::from(new.price))
            .fetch_one(&self.pool)
            .await?;

        tracing::debug!(table = self.kind.table(), id, "Row inserted.");
        Ok(id)
    }

    async fn delete_by_id(&self, id: i32) -> Result<u64, DbError> {
        let affected = sqlx::query(&self.sql.delete)
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::debug!(table = self.kind.table(), id, affected, "Delete executed.");
        Ok(affected)
    }
}

/// One repository per resource, handed to the web layer at construction.
#[derive(Clone)]
pub struct Repositories {
    pub trains: Arc<dyn ResourceRepository>,
    pub planes: Arc<dyn ResourceRepository>,
    pub history: Arc<dyn ResourceRepository>,
}

impl Repositories {
    /// All three repositories backed by the same PostgreSQL pool.
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            trains: Arc::new(PgResourceRepository::new(pool.clone(), ResourceKind::Train)),
            planes: Arc::new(PgResourceRepository::new(pool.clone(), ResourceKind::Plane)),
            history: Arc::new(PgResourceRepository::new(pool, ResourceKind::History)),
        }
    }

    /// All three repositories held in process memory.
    pub fn in_memory() -> Self {
        Self {
            trains: Arc::new(MemoryRepository::new(ResourceKind::Train)),
            planes: Arc::new(MemoryRepository::new(ResourceKind::Plane)),
            history: Arc::new(MemoryRepository::new(ResourceKind::History)),
        }
    }

    pub fn for_kind(&self, kind: ResourceKind) -> &Arc<dyn ResourceRepository> {
        match kind {
            ResourceKind::Train => &self.trains,
            ResourceKind::Plane => &self.planes,
            ResourceKind::History => &self.history,
        }
    }
}
