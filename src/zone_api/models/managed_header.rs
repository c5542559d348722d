use serde::{Deserialize, Serialize};

/// A single toggleable header rule maintained by the remote service.
///
/// `has_conflict` and `conflicts_with` are only ever populated by the server;
/// they are omitted from serialized output when absent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ManagedHeader {
    pub id: String,
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_conflict: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflicts_with: Option<Vec<String>>,
}

impl ManagedHeader {
    pub fn new(id: impl Into<String>, enabled: bool) -> Self {
        Self {
            id: id.into(),
            enabled,
            has_conflict: None,
            conflicts_with: None,
        }
    }
}

/// The full toggle-set for a zone at a point in time. Order is whatever the
/// server returned; uniqueness is not enforced client-side.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ManagedHeaders {
    pub managed_request_headers: Vec<ManagedHeader>,
    pub managed_response_headers: Vec<ManagedHeader>,
}
