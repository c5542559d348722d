use thiserror::Error;

/// Errors surfaced by the zone API binding.
///
/// The four kinds stay distinguishable so callers can tell a precondition
/// failure from a transport failure from a bad response body.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The zone identifier was empty; no request was issued.
    #[error("required missing zone ID")]
    MissingZoneId,

    /// The request payload could not be encoded to JSON.
    #[error("unable to serialize request payload: {0}")]
    Encode(#[source] serde_json::Error),

    /// The transport layer failed; propagated unchanged.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body did not match the expected envelope.
    #[error("unable to deserialize response, body was: {body:?}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },
}

impl ApiError {
    pub(crate) fn decode(source: serde_json::Error, body: &[u8]) -> Self {
        Self::Decode {
            source,
            body: String::from_utf8_lossy(body).into_owned(),
        }
    }
}
