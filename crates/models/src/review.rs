//! Queries over the `reviews` collection.

use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::options::{FindOptions, UpdateOptions};

use crate::ack::{DeleteAck, InsertAck, UpdateAck};
use crate::db::{id_filter, Store};
use crate::errors::StoreError;

pub async fn insert(store: &Store, document: Document) -> Result<InsertAck, StoreError> {
    Ok(store.reviews().insert_one(document, None).await?.into())
}

/// Reviews newest-first, optionally restricted to one owner's email.
pub async fn list(store: &Store, owner: Option<&str>) -> Result<Vec<Document>, StoreError> {
    let filter = match owner {
        Some(email) => doc! { "email": email },
        None => doc! {},
    };
    let options = FindOptions::builder().sort(doc! { "date": -1 }).build();
    let cursor = store.reviews().find(filter, options).await?;
    Ok(cursor.try_collect().await?)
}

/// Reviews referencing a service. The `service` field holds the referenced
/// id as a string, so the filter compares strings, not ObjectIds.
pub async fn list_for_service(store: &Store, service_id: &str) -> Result<Vec<Document>, StoreError> {
    let options = FindOptions::builder().sort(doc! { "date": -1 }).build();
    let cursor = store.reviews().find(doc! { "service": service_id }, options).await?;
    Ok(cursor.try_collect().await?)
}

pub async fn find_by_id(store: &Store, id: &str) -> Result<Option<Document>, StoreError> {
    Ok(store.reviews().find_one(id_filter(id)?, None).await?)
}

/// Delete by id. A miss is not an error; the ack carries `deletedCount: 0`.
pub async fn delete_by_id(store: &Store, id: &str) -> Result<DeleteAck, StoreError> {
    Ok(store.reviews().delete_one(id_filter(id)?, None).await?.into())
}

/// Replace only the `message` field. Upserts on a miss, which creates a
/// document holding just `_id` and `message`.
pub async fn set_message(store: &Store, id: &str, message: &str) -> Result<UpdateAck, StoreError> {
    let options = UpdateOptions::builder().upsert(true).build();
    let res = store
        .reviews()
        .update_one(id_filter(id)?, doc! { "$set": { "message": message } }, options)
        .await?;
    Ok(res.into())
}
