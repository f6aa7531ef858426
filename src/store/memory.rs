//! In-process employee store

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use crate::types::{EmployeeFields, EmployeeRecord};
use crate::Result;

use super::EmployeeStore;

/// Employee store kept in memory, in insertion order
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<Vec<EmployeeRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeStore for MemoryStore {
    async fn list(&self) -> Result<Vec<EmployeeRecord>> {
        Ok(self.records.read().await.clone())
    }

    async fn insert(&self, record: &EmployeeRecord) -> Result<ObjectId> {
        let id = ObjectId::new();
        let mut stored = record.clone();
        stored.id = Some(id);

        self.records.write().await.push(stored);
        Ok(id)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<EmployeeRecord>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id == Some(id)).cloned())
    }

    async fn update_fields(&self, id: ObjectId, fields: &EmployeeFields) -> Result<bool> {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|r| r.id == Some(id)) {
            Some(record) => {
                record.name = fields.name.clone();
                record.age = fields.age;
                record.salary = fields.salary;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: ObjectId) -> Result<u64> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id != Some(id));
        Ok((before - records.len()) as u64)
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
