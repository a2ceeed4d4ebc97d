/*
[INPUT]:  Call parameters (from/to/answer_url, call_uuid, request_uuid)
[OUTPUT]: Call detail records, live call state and call control responses
[POS]:    HTTP layer - call endpoints
[UPDATE]: When adding call endpoints or changing their paths
*/

use crate::http::{PlivoClient, Result};
use crate::types::{ApiResponse, Params};
use reqwest::Method;

impl PlivoClient {
    /// List call detail records
    ///
    /// GET /Call/
    pub async fn get_cdrs(&self, params: Params) -> Result<ApiResponse> {
        self.get("/Call/", params).await
    }

    /// GET /Call/{record_id}/
    pub async fn get_cdr(&self, mut params: Params) -> Result<ApiResponse> {
        let record_id = params.take_required("record_id")?;
        self.get(&format!("/Call/{record_id}/"), params).await
    }

    /// List calls in progress
    ///
    /// GET /Call/?status=live
    pub async fn get_live_calls(&self, mut params: Params) -> Result<ApiResponse> {
        params.insert("status", "live");
        self.get("/Call/", params).await
    }

    /// GET /Call/{call_uuid}/?status=live
    pub async fn get_live_call(&self, mut params: Params) -> Result<ApiResponse> {
        let call_uuid = params.take_required("call_uuid")?;
        params.insert("status", "live");
        self.get(&format!("/Call/{call_uuid}/"), params).await
    }

    /// Place an outbound call
    ///
    /// POST /Call/
    pub async fn make_call(&self, params: Params) -> Result<ApiResponse> {
        self.post("/Call/", params).await
    }

    /// DELETE /Call/
    pub async fn hangup_all_calls(&self, params: Params) -> Result<ApiResponse> {
        self.delete("/Call/", params).await
    }

    /// Transfer a live call to new answer URLs
    ///
    /// POST /Call/{call_uuid}/
    pub async fn transfer_call(&self, mut params: Params) -> Result<ApiResponse> {
        let call_uuid = params.take_required("call_uuid")?;
        self.post(&format!("/Call/{call_uuid}/"), params).await
    }

    /// DELETE /Call/{call_uuid}/
    pub async fn hangup_call(&self, mut params: Params) -> Result<ApiResponse> {
        let call_uuid = params.take_required("call_uuid")?;
        self.delete(&format!("/Call/{call_uuid}/"), params).await
    }

    /// Start recording a live call
    ///
    /// POST /Call/{call_uuid}/Record/
    pub async fn record(&self, params: Params) -> Result<ApiResponse> {
        self.call_action(Method::POST, "Record", params).await
    }

    /// DELETE /Call/{call_uuid}/Record/
    pub async fn stop_record(&self, params: Params) -> Result<ApiResponse> {
        self.call_action(Method::DELETE, "Record", params).await
    }

    /// Play audio into a live call
    ///
    /// POST /Call/{call_uuid}/Play/
    pub async fn play(&self, params: Params) -> Result<ApiResponse> {
        self.call_action(Method::POST, "Play", params).await
    }

    /// DELETE /Call/{call_uuid}/Play/
    pub async fn stop_play(&self, params: Params) -> Result<ApiResponse> {
        self.call_action(Method::DELETE, "Play", params).await
    }

    /// Speak text into a live call
    ///
    /// POST /Call/{call_uuid}/Speak/
    pub async fn speak(&self, params: Params) -> Result<ApiResponse> {
        self.call_action(Method::POST, "Speak", params).await
    }

    /// DELETE /Call/{call_uuid}/Speak/
    pub async fn stop_speak(&self, params: Params) -> Result<ApiResponse> {
        self.call_action(Method::DELETE, "Speak", params).await
    }

    /// Send DTMF digits on a live call
    ///
    /// POST /Call/{call_uuid}/DTMF/
    pub async fn send_digits(&self, params: Params) -> Result<ApiResponse> {
        self.call_action(Method::POST, "DTMF", params).await
    }

    /// Cancel a call that has been requested but not yet answered
    ///
    /// DELETE /Request/{request_uuid}/
    pub async fn hangup_request(&self, mut params: Params) -> Result<ApiResponse> {
        let request_uuid = params.take_required("request_uuid")?;
        self.delete(&format!("/Request/{request_uuid}/"), params).await
    }

    async fn call_action(
        &self,
        method: Method,
        action: &str,
        mut params: Params,
    ) -> Result<ApiResponse> {
        let call_uuid = params.take_required("call_uuid")?;
        self.request(method, &format!("/Call/{call_uuid}/{action}/"), params)
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, PlivoClient, PlivoError};
    use crate::types::Params;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> PlivoClient {
        let config = ClientConfig {
            base_url: server.uri(),
            ..ClientConfig::default()
        };
        PlivoClient::with_config("MAID", "token", config).expect("client init")
    }

    #[tokio::test]
    async fn test_make_call() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("POST"))
            .and(path("/v1/Account/MAID/Call/"))
            .and(body_json(json!({
                "from": "15551230000",
                "to": "15559870000",
                "answer_url": "http://example.com/answer",
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "message": "call fired",
                "request_uuid": "9834029e-58b6-11e1-b8b7-a5bd0e4e126f",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let params = Params::new()
            .with("from", "15551230000")
            .with("to", "15559870000")
            .with("answer_url", "http://example.com/answer");
        let response = client_for(&server)
            .make_call(params)
            .await
            .expect("make_call failed");

        assert_eq!(response.status, 201);
        assert_eq!(response.field("message"), Some(&json!("call fired")));
    }

    #[tokio::test]
    async fn test_get_live_call_adds_status() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("GET"))
            .and(path("/v1/Account/MAID/Call/abc-123/"))
            .and(query_param("status", "live"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"call_uuid": "abc-123"})))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .get_live_call(Params::new().with("call_uuid", "abc-123"))
            .await
            .expect("get_live_call failed");

        assert_eq!(response.field("call_uuid"), Some(&json!("abc-123")));
    }

    #[tokio::test]
    async fn test_stop_speak_uses_delete() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("DELETE"))
            .and(path("/v1/Account/MAID/Call/abc-123/Speak/"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .stop_speak(Params::new().with("call_uuid", "abc-123"))
            .await
            .expect("stop_speak failed");

        assert_eq!(response.status, 204);
    }

    #[tokio::test]
    async fn test_send_digits_requires_call_uuid() {
        let server = MockServer::start().await;
        let err = client_for(&server)
            .send_digits(Params::new().with("digits", "123"))
            .await
            .expect_err("call_uuid is required");

        assert!(matches!(err, PlivoError::MissingParameter { ref name } if name == "call_uuid"));
    }

    #[tokio::test]
    async fn test_error_status_is_returned() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("DELETE"))
            .and(path("/v1/Account/MAID/Request/req-1/"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "not found"})))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .hangup_request(Params::new().with("request_uuid", "req-1"))
            .await
            .expect("non-2xx should not be an error");

        assert_eq!(response.status, 404);
        assert!(!response.is_success());
        assert_eq!(response.field("error"), Some(&json!("not found")));
    }
}
