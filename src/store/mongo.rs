//! MongoDB employee store

use std::time::Duration;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};

use crate::types::{EmployeeFields, EmployeeRecord};
use crate::{Error, Result};

use super::EmployeeStore;

/// MongoDB store backend
pub struct MongoStore {
    db: Database,
    collection: Collection<EmployeeRecord>,
}

impl MongoStore {
    /// Connect, select `database` and confirm the server answers a ping,
    /// all within `timeout`.
    pub async fn connect(
        uri: &str,
        database: &str,
        collection: &str,
        timeout: Duration,
    ) -> Result<Self> {
        let attempt = async {
            let mut options = ClientOptions::parse(uri)
                .await
                .map_err(|e| Error::connection(format!("invalid store uri: {}", e)))?;
            options.connect_timeout = Some(timeout);
            options.server_selection_timeout = Some(timeout);
            options.app_name = Some(env!("CARGO_PKG_NAME").to_string());

            let client = Client::with_options(options)
                .map_err(|e| Error::connection(e.to_string()))?;
            let db = client.database(database);

            db.run_command(doc! { "ping": 1 })
                .await
                .map_err(|e| Error::connection(e.to_string()))?;

            Ok::<_, Error>(db)
        };

        let db = tokio::time::timeout(timeout, attempt)
            .await
            .map_err(|_| {
                Error::connection(format!("store not reachable within {:?}", timeout))
            })??;

        tracing::info!(database, collection, "Connected to MongoDB");

        Ok(Self {
            collection: db.collection(collection),
            db,
        })
    }

    fn by_id(id: ObjectId) -> Document {
        doc! { "_id": id }
    }
}

#[async_trait]
impl EmployeeStore for MongoStore {
    async fn list(&self) -> Result<Vec<EmployeeRecord>> {
        let cursor = self.collection.find(doc! {}).await?;
        let records: Vec<EmployeeRecord> = cursor.try_collect().await?;
        Ok(records)
    }

    async fn insert(&self, record: &EmployeeRecord) -> Result<ObjectId> {
        let result = self.collection.insert_one(record).await?;

        result.inserted_id.as_object_id().ok_or_else(|| {
            Error::store(format!(
                "store assigned a non-ObjectId id: {}",
                result.inserted_id
            ))
        })
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<EmployeeRecord>> {
        Ok(self.collection.find_one(Self::by_id(id)).await?)
    }

    async fn update_fields(&self, id: ObjectId, fields: &EmployeeFields) -> Result<bool> {
        let update = doc! {
            "$set": {
                "name": fields.name.as_str(),
                "age": fields.age,
                "salary": fields.salary,
            }
        };

        let previous = self
            .collection
            .find_one_and_update(Self::by_id(id), update)
            .await?;

        Ok(previous.is_some())
    }

    async fn delete(&self, id: ObjectId) -> Result<u64> {
        let result = self.collection.delete_one(Self::by_id(id)).await?;
        Ok(result.deleted_count)
    }

    async fn ping(&self) -> Result<()> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
