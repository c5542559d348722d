use crate::zone_api::models::managed_header::ManagedHeaders;
use serde::Deserialize;

/// The standard response envelope wrapping a managed-headers result.
///
/// `success`, `errors` and `messages` default when the server omits them, so
/// a bare `{"result": ...}` body still decodes.
#[derive(Deserialize, Debug, Clone)]
pub struct ManagedHeadersResponse {
    pub result: ManagedHeaders,
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<ResponseInfo>,
    #[serde(default)]
    pub messages: Vec<ResponseInfo>,
}

/// An error or informational message attached to a response envelope.
#[derive(Deserialize, Debug, Clone)]
pub struct ResponseInfo {
    pub code: i64,
    pub message: String,
}
