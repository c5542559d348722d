use crate::zone_api::models::managed_header::ManagedHeaders;
use serde::{Deserialize, Serialize};

/// Payload for a managed-headers update. Serializes transparently as the
/// wrapped toggle-set, which is exactly the PATCH body the API expects.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(transparent)]
pub struct UpdateManagedHeadersParams {
    pub managed_headers: ManagedHeaders,
}

impl From<ManagedHeaders> for UpdateManagedHeadersParams {
    fn from(managed_headers: ManagedHeaders) -> Self {
        Self { managed_headers }
    }
}
