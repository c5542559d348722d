use crate::zone_api::dispatcher::{Dispatcher, HttpDispatcher};
use crate::zone_api::error::ApiError;
use crate::zone_api::models::managed_header::ManagedHeaders;
use crate::zone_api::models::request::list_managed_headers_params::ListManagedHeadersParams;
use crate::zone_api::models::request::update_managed_headers_params::UpdateManagedHeadersParams;
use crate::zone_api::models::response::managed_headers_response::ManagedHeadersResponse;
use reqwest::Method;
use std::sync::Arc;

/// Client for the managed request/response header toggles of a zone.
///
/// Stateless: each call is a single request/response exchange through the
/// dispatcher, safe to issue concurrently from multiple callers.
#[derive(Clone)]
pub struct ZoneClient<D>
where
    D: Dispatcher,
{
    dispatcher: D,
}

impl ZoneClient<HttpDispatcher> {
    pub fn new(base_url: &str, api_token: &str) -> Self {
        Self::with_dispatcher(HttpDispatcher::new(base_url, api_token))
    }
}

impl<D> ZoneClient<D>
where
    D: Dispatcher,
{
    pub fn with_dispatcher(dispatcher: D) -> Self {
        Self { dispatcher }
    }

    fn decode_envelope(raw: &[u8]) -> Result<ManagedHeaders, ApiError> {
        let envelope: ManagedHeadersResponse =
            serde_json::from_slice(raw).map_err(|e| ApiError::decode(e, raw))?;
        Ok(envelope.result)
    }
}

impl<D> ZoneApiTrait for ZoneClient<D>
where
    D: Dispatcher + Send + Sync,
{
    async fn list_managed_headers(
        &self,
        zone_id: &str,
        params: ListManagedHeadersParams,
    ) -> Result<ManagedHeaders, ApiError> {
        if zone_id.is_empty() {
            return Err(ApiError::MissingZoneId);
        }

        let mut uri = format!("/zones/{}/managed_headers", zone_id);
        if params.only_enabled {
            uri.push_str("?status=enabled");
        }

        let raw = self.dispatcher.send(Method::GET, &uri, None).await?;
        Self::decode_envelope(&raw)
    }

    async fn update_managed_headers(
        &self,
        zone_id: &str,
        params: UpdateManagedHeadersParams,
    ) -> Result<ManagedHeaders, ApiError> {
        if zone_id.is_empty() {
            return Err(ApiError::MissingZoneId);
        }

        let uri = format!("/zones/{}/managed_headers", zone_id);
        let payload =
            serde_json::to_vec(&params.managed_headers).map_err(ApiError::Encode)?;

        let raw = self
            .dispatcher
            .send(Method::PATCH, &uri, Some(payload))
            .await?;
        Self::decode_envelope(&raw)
    }
}

pub trait ZoneApiTrait {
    fn list_managed_headers(
        &self,
        zone_id: &str,
        params: ListManagedHeadersParams,
    ) -> impl std::future::Future<Output = Result<ManagedHeaders, ApiError>> + Send;
    fn update_managed_headers(
        &self,
        zone_id: &str,
        params: UpdateManagedHeadersParams,
    ) -> impl std::future::Future<Output = Result<ManagedHeaders, ApiError>> + Send;
}

// Implement ZoneApiTrait for Arc<T> where T: ZoneApiTrait
impl<T> ZoneApiTrait for Arc<T>
where
    T: ZoneApiTrait + Send + Sync,
{
    async fn list_managed_headers(
        &self,
        zone_id: &str,
        params: ListManagedHeadersParams,
    ) -> Result<ManagedHeaders, ApiError> {
        self.as_ref().list_managed_headers(zone_id, params).await
    }

    async fn update_managed_headers(
        &self,
        zone_id: &str,
        params: UpdateManagedHeadersParams,
    ) -> Result<ManagedHeaders, ApiError> {
        self.as_ref().update_managed_headers(zone_id, params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zone_api::models::managed_header::ManagedHeader;
    use std::sync::Mutex;

    struct MockDispatcher {
        calls: Mutex<Vec<(Method, String, Option<Vec<u8>>)>>,
        response: Vec<u8>,
    }

    impl MockDispatcher {
        fn returning(response: &str) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                response: response.as_bytes().to_vec(),
            }
        }

        fn calls(&self) -> Vec<(Method, String, Option<Vec<u8>>)> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Dispatcher for MockDispatcher {
        async fn send(
            &self,
            method: Method,
            path: &str,
            body: Option<Vec<u8>>,
        ) -> Result<Vec<u8>, ApiError> {
            self.calls
                .lock()
                .unwrap()
                .push((method, path.to_string(), body));
            Ok(self.response.clone())
        }
    }

    const EMPTY_RESULT: &str =
        r#"{"result":{"managed_request_headers":[],"managed_response_headers":[]}}"#;

    #[tokio::test]
    async fn list_rejects_empty_zone_id_without_dispatching() {
        let dispatcher = MockDispatcher::returning(EMPTY_RESULT);
        let client = ZoneClient::with_dispatcher(&dispatcher);

        let err = client
            .list_managed_headers("", ListManagedHeadersParams::default())
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::MissingZoneId));
        assert!(dispatcher.calls().is_empty());
    }

    #[tokio::test]
    async fn update_rejects_empty_zone_id_without_dispatching() {
        let dispatcher = MockDispatcher::returning(EMPTY_RESULT);
        let client = ZoneClient::with_dispatcher(&dispatcher);

        let err = client
            .update_managed_headers("", UpdateManagedHeadersParams::default())
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::MissingZoneId));
        assert!(dispatcher.calls().is_empty());
    }

    #[tokio::test]
    async fn list_with_only_enabled_appends_status_query() {
        let dispatcher = MockDispatcher::returning(EMPTY_RESULT);
        let client = ZoneClient::with_dispatcher(&dispatcher);

        client
            .list_managed_headers("zone123", ListManagedHeadersParams { only_enabled: true })
            .await
            .unwrap();

        let calls = dispatcher.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, Method::GET);
        assert_eq!(calls[0].1, "/zones/zone123/managed_headers?status=enabled");
        assert!(calls[0].2.is_none());
    }

    #[tokio::test]
    async fn list_without_only_enabled_omits_status_query() {
        let dispatcher = MockDispatcher::returning(EMPTY_RESULT);
        let client = ZoneClient::with_dispatcher(&dispatcher);

        client
            .list_managed_headers("zone123", ListManagedHeadersParams::default())
            .await
            .unwrap();

        assert_eq!(dispatcher.calls()[0].1, "/zones/zone123/managed_headers");
    }

    #[tokio::test]
    async fn list_decodes_the_response_envelope() {
        let dispatcher = MockDispatcher::returning(
            r#"{"result":{"managed_request_headers":[{"id":"h1","enabled":true}],"managed_response_headers":[]}}"#,
        );
        let client = ZoneClient::with_dispatcher(&dispatcher);

        let headers = client
            .list_managed_headers("zone123", ListManagedHeadersParams { only_enabled: true })
            .await
            .unwrap();

        assert_eq!(headers.managed_request_headers.len(), 1);
        assert_eq!(headers.managed_request_headers[0].id, "h1");
        assert!(headers.managed_request_headers[0].enabled);
        assert!(headers.managed_response_headers.is_empty());
    }

    #[tokio::test]
    async fn update_patches_the_exact_payload() {
        let dispatcher = MockDispatcher::returning(EMPTY_RESULT);
        let client = ZoneClient::with_dispatcher(&dispatcher);

        let payload = ManagedHeaders {
            managed_request_headers: vec![ManagedHeader::new("h1", false)],
            managed_response_headers: vec![],
        };
        client
            .update_managed_headers("zone123", payload.into())
            .await
            .unwrap();

        let calls = dispatcher.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, Method::PATCH);
        assert_eq!(calls[0].1, "/zones/zone123/managed_headers");
        let body = calls[0].2.as_deref().unwrap();
        assert_eq!(
            std::str::from_utf8(body).unwrap(),
            r#"{"managed_request_headers":[{"id":"h1","enabled":false}],"managed_response_headers":[]}"#
        );
    }

    #[tokio::test]
    async fn update_round_trips_the_toggle_set() {
        let sent = ManagedHeaders {
            managed_request_headers: vec![
                ManagedHeader::new("add_true_client_ip_headers", true),
                ManagedHeader::new("add_visitor_location_headers", false),
            ],
            managed_response_headers: vec![ManagedHeader::new("remove_x_powered_by_header", true)],
        };

        // The server echoes the accepted toggle-set back inside the envelope.
        let mirrored = format!(
            r#"{{"result":{},"success":true,"errors":[],"messages":[]}}"#,
            serde_json::to_string(&sent).unwrap()
        );
        let dispatcher = MockDispatcher::returning(&mirrored);
        let client = ZoneClient::with_dispatcher(&dispatcher);

        let returned = client
            .update_managed_headers("zone123", sent.clone().into())
            .await
            .unwrap();

        assert_eq!(returned, sent);
    }

    #[tokio::test]
    async fn malformed_body_yields_a_decode_error() {
        let dispatcher = MockDispatcher::returning("<html>502 Bad Gateway</html>");
        let client = ZoneClient::with_dispatcher(&dispatcher);

        let err = client
            .list_managed_headers("zone123", ListManagedHeadersParams::default())
            .await
            .unwrap_err();

        match err {
            ApiError::Decode { body, .. } => {
                assert!(body.contains("502 Bad Gateway"));
            }
            other => panic!("expected decode error, got {:?}", other),
        }
    }
}
