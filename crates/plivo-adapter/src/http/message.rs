/*
[INPUT]:  Message parameters (src, dst, text), pricing filters
[OUTPUT]: Message send/list responses and pricing data
[POS]:    HTTP layer - messaging and pricing endpoints
[UPDATE]: When adding message endpoints or changing their paths
*/

use crate::http::{PlivoClient, Result};
use crate::types::{ApiResponse, Params};

impl PlivoClient {
    /// Get pricing for a country (`country_iso`)
    ///
    /// GET /Pricing/
    pub async fn pricing(&self, params: Params) -> Result<ApiResponse> {
        self.get("/Pricing/", params).await
    }

    /// Send an SMS
    ///
    /// POST /Message/
    pub async fn send_message(&self, params: Params) -> Result<ApiResponse> {
        self.post("/Message/", params).await
    }

    /// GET /Message/
    pub async fn get_messages(&self, params: Params) -> Result<ApiResponse> {
        self.get("/Message/", params).await
    }

    /// GET /Message/{record_id}/
    pub async fn get_message(&self, mut params: Params) -> Result<ApiResponse> {
        let record_id = params.take_required("record_id")?;
        self.get(&format!("/Message/{record_id}/"), params).await
    }
}
