/*
[INPUT]:  SIP endpoint credentials and endpoint ids
[OUTPUT]: SIP endpoint management responses
[POS]:    HTTP layer - endpoint endpoints
[UPDATE]: When adding endpoint operations or changing their paths
*/

use crate::http::{PlivoClient, Result};
use crate::types::{ApiResponse, Params};

impl PlivoClient {
    /// List SIP endpoints
    ///
    /// GET /Endpoint/
    pub async fn get_endpoints(&self, params: Params) -> Result<ApiResponse> {
        self.get("/Endpoint/", params).await
    }

    /// Create a SIP endpoint (`username`, `password`, `alias`)
    ///
    /// POST /Endpoint/
    pub async fn create_endpoint(&self, params: Params) -> Result<ApiResponse> {
        self.post("/Endpoint/", params).await
    }

    /// GET /Endpoint/{endpoint_id}/
    pub async fn get_endpoint(&self, mut params: Params) -> Result<ApiResponse> {
        let endpoint_id = params.take_required("endpoint_id")?;
        self.get(&format!("/Endpoint/{endpoint_id}/"), params).await
    }

    /// POST /Endpoint/{endpoint_id}/
    pub async fn modify_endpoint(&self, mut params: Params) -> Result<ApiResponse> {
        let endpoint_id = params.take_required("endpoint_id")?;
        self.post(&format!("/Endpoint/{endpoint_id}/"), params).await
    }

    /// DELETE /Endpoint/{endpoint_id}/
    pub async fn delete_endpoint(&self, mut params: Params) -> Result<ApiResponse> {
        let endpoint_id = params.take_required("endpoint_id")?;
        self.delete(&format!("/Endpoint/{endpoint_id}/"), params).await
    }
}
