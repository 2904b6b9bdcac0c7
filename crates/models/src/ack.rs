use mongodb::bson::Bson;
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
use serde::Serialize;

/// Acknowledgment bodies returned to clients, shaped like the document
/// store's own write results (camelCase, hex identifiers).

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertAck {
    pub acknowledged: bool,
    pub inserted_id: String,
}

impl From<InsertOneResult> for InsertAck {
    fn from(res: InsertOneResult) -> Self {
        Self { acknowledged: true, inserted_id: bson_id_string(&res.inserted_id) }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAck {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl From<DeleteResult> for DeleteAck {
    fn from(res: DeleteResult) -> Self {
        Self { acknowledged: true, deleted_count: res.deleted_count }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAck {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upserted_id: Option<String>,
}

impl From<UpdateResult> for UpdateAck {
    fn from(res: UpdateResult) -> Self {
        Self {
            acknowledged: true,
            matched_count: res.matched_count,
            modified_count: res.modified_count,
            upserted_id: res.upserted_id.as_ref().map(bson_id_string),
        }
    }
}

fn bson_id_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}
