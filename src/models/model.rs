//! Public model representation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::integrations::llamastack;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Model {
    pub id: String,
    pub created: DateTime<Utc>,
    pub owned_by: String,
}

/// Always a bespoke list type rather than a bare array, so pagination data
/// can be added later without breaking the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ModelList {
    pub items: Vec<Model>,
}

impl From<llamastack::Model> for Model {
    fn from(model: llamastack::Model) -> Self {
        // Timestamps outside chrono's range collapse to the epoch.
        let created = DateTime::from_timestamp(model.created, 0).unwrap_or_default();
        Self {
            id: model.id,
            created,
            owned_by: model.owned_by,
        }
    }
}

impl From<llamastack::ModelList> for ModelList {
    fn from(list: llamastack::ModelList) -> Self {
        Self {
            items: list.data.into_iter().map(Model::from).collect(),
        }
    }
}
