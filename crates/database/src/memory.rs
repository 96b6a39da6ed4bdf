use crate::DbError;
use crate::repository::ResourceRepository;
use async_trait::async_trait;
use core_types::{NewRecord, Record, ResourceKind};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i32, Record>,
    last_id: i32,
}

/// A repository that keeps rows in process memory.
///
/// Ids start at 1 and are never reused, like a `SERIAL` column. Nothing is
/// persisted; this exists so the HTTP layer can run without PostgreSQL.
#[derive(Debug)]
pub struct MemoryRepository {
    kind: ResourceKind,
    table: RwLock<Table>,
}

impl MemoryRepository {
    pub fn new(kind: ResourceKind) -> Self {
        Self { kind, table: RwLock::new(Table::default()) }
    }
}

#[async_trait]
impl ResourceRepository for MemoryRepository {
    fn kind(&self) -> ResourceKind {
        self.kind
    }

    async fn list_all(&self) -> Result<Vec<Record>, DbError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn insert(&self, new: &NewRecord) -> Result<i32, DbError> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let id = table.last_id;
        table.rows.insert(id, Record { id, name: new.name.clone(), price: new.price });
        Ok(id)
    }

    async fn delete_by_id(&self, id: i32) -> Result<u64, DbError> {
        let removed = self.table.write().await.rows.remove(&id);
        Ok(u64::from(removed.is_some()))
    }
}
