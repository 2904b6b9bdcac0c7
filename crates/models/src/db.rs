use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};
use tracing::info;

use crate::errors::StoreError;

/// Handle on the backing MongoDB database. Constructed once at startup and
/// cloned into request state; the driver pools connections internally.
#[derive(Clone)]
pub struct Store {
    db: mongodb::Database,
}

impl Store {
    /// Connect and ping. Callers must not start accepting requests until
    /// this has returned.
    pub async fn connect(cfg: &configs::DatabaseConfig) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(&cfg.uri).await?;
        options.app_name = Some("carryou".to_string());
        let client = Client::with_options(options)?;
        let db = client.database(&cfg.name);
        db.run_command(doc! { "ping": 1 }, None).await?;
        info!(database = %cfg.name, "connected to document store");
        Ok(Self { db })
    }

    pub fn services(&self) -> Collection<Document> {
        self.db.collection("services")
    }

    pub fn reviews(&self) -> Collection<Document> {
        self.db.collection("reviews")
    }
}

/// Convert a textual path parameter into an `_id` equality filter.
pub fn id_filter(id: &str) -> Result<Document, StoreError> {
    let oid = ObjectId::parse_str(id).map_err(|_| StoreError::InvalidId(id.to_string()))?;
    Ok(doc! { "_id": oid })
}
