//! Employee store abstraction
//!
//! Provides the shared store handle used by every request handler. The
//! handle is established once at startup by [`connect`] and is cheap to
//! clone across handlers.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::types::{EmployeeFields, EmployeeRecord};
use crate::Result;

pub mod memory;
pub mod mongo;

/// Employee collection operations, one store round trip each
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// All records, in the store's natural order
    async fn list(&self) -> Result<Vec<EmployeeRecord>>;

    /// Insert a record and return the id the store assigned
    async fn insert(&self, record: &EmployeeRecord) -> Result<ObjectId>;

    /// Fetch a single record by id
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<EmployeeRecord>>;

    /// Set `name`, `age` and `salary` on the matching record.
    /// Returns false when nothing matched.
    async fn update_fields(&self, id: ObjectId, fields: &EmployeeFields) -> Result<bool>;

    /// Delete the matching record and return the deleted count
    async fn delete(&self, id: ObjectId) -> Result<u64>;

    /// Check that the store is reachable
    async fn ping(&self) -> Result<()>;
}

/// Store configuration
#[derive(Debug, Clone)]
pub enum StoreConfig {
    Mongo {
        uri: String,
        database: String,
        collection: String,
        connect_timeout: Duration,
    },
    Memory,
}

/// Establish the process-wide store handle.
///
/// Fails with [`crate::Error::Connection`] when the store cannot be reached
/// within the configured timeout.
pub async fn connect(config: StoreConfig) -> Result<Arc<dyn EmployeeStore>> {
    match config {
        StoreConfig::Mongo {
            uri,
            database,
            collection,
            connect_timeout,
        } => {
            let store = mongo::MongoStore::connect(&uri, &database, &collection, connect_timeout)
                .await?;
            Ok(Arc::new(store))
        }
        StoreConfig::Memory => Ok(Arc::new(memory::MemoryStore::new())),
    }
}
