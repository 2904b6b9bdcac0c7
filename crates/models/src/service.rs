//! Queries over the `services` collection. Documents are opaque; clients
//! decide the shape and only `date` is assumed, for sort ordering.

use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::options::FindOptions;

use crate::ack::InsertAck;
use crate::db::{id_filter, Store};
use crate::errors::StoreError;

/// All services, store-default order.
pub async fn list_all(store: &Store) -> Result<Vec<Document>, StoreError> {
    let cursor = store.services().find(doc! {}, None).await?;
    Ok(cursor.try_collect().await?)
}

/// The `limit` most recent services. Sort runs before the limit so this is
/// newest-first, not an arbitrary slice.
pub async fn list_recent(store: &Store, limit: i64) -> Result<Vec<Document>, StoreError> {
    let options = FindOptions::builder().sort(doc! { "date": -1 }).limit(limit).build();
    let cursor = store.services().find(doc! {}, options).await?;
    Ok(cursor.try_collect().await?)
}

pub async fn find_by_id(store: &Store, id: &str) -> Result<Option<Document>, StoreError> {
    Ok(store.services().find_one(id_filter(id)?, None).await?)
}

/// Insert the client-submitted document verbatim.
pub async fn insert(store: &Store, document: Document) -> Result<InsertAck, StoreError> {
    Ok(store.services().insert_one(document, None).await?.into())
}
