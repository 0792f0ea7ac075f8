//! Public vector database representation.

use serde::{Deserialize, Serialize};

use crate::integrations::llamastack;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorDb {
    pub identifier: String,
    pub provider_id: String,
    pub provider_resource_id: String,
    pub embedding_dimension: i64,
    pub embedding_model: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct VectorDbList {
    pub items: Vec<VectorDb>,
}

impl From<llamastack::VectorDb> for VectorDb {
    fn from(db: llamastack::VectorDb) -> Self {
        Self {
            identifier: db.identifier,
            provider_id: db.provider_id,
            provider_resource_id: db.provider_resource_id,
            embedding_dimension: db.embedding_dimension,
            embedding_model: db.embedding_model,
        }
    }
}

impl From<llamastack::VectorDbList> for VectorDbList {
    fn from(list: llamastack::VectorDbList) -> Self {
        Self {
            items: list.data.into_iter().map(VectorDb::from).collect(),
        }
    }
}
