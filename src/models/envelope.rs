//! Response envelope shared by every JSON endpoint.

use serde::{Deserialize, Serialize};

/// Placeholder metadata for envelopes that carry none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct NoMetadata {}

/// `{ "data": ..., "metadata": ... }` wrapper.
///
/// `metadata` is left out of the JSON when absent so that adding pagination
/// details later does not change existing responses.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Envelope<D, M = NoMetadata> {
    pub data: D,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<M>,
}

impl<D> Envelope<D> {
    pub fn new(data: D) -> Self {
        Self { data, metadata: None }
    }
}
