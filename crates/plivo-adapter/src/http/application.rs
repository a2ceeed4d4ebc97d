/*
[INPUT]:  Application parameters (answer/hangup URLs, app_id)
[OUTPUT]: Application management responses
[POS]:    HTTP layer - application endpoints
[UPDATE]: When adding application endpoints or changing their paths
*/

use crate::http::{PlivoClient, Result};
use crate::types::{ApiResponse, Params};

impl PlivoClient {
    /// List applications
    ///
    /// GET /Application/
    pub async fn get_applications(&self, params: Params) -> Result<ApiResponse> {
        self.get("/Application/", params).await
    }

    /// Create an application
    ///
    /// POST /Application/
    pub async fn create_application(&self, params: Params) -> Result<ApiResponse> {
        self.post("/Application/", params).await
    }

    /// GET /Application/{app_id}/
    pub async fn get_application(&self, mut params: Params) -> Result<ApiResponse> {
        let app_id = params.take_required("app_id")?;
        self.get(&format!("/Application/{app_id}/"), params).await
    }

    /// POST /Application/{app_id}/
    pub async fn modify_application(&self, mut params: Params) -> Result<ApiResponse> {
        let app_id = params.take_required("app_id")?;
        self.post(&format!("/Application/{app_id}/"), params).await
    }

    /// DELETE /Application/{app_id}/
    pub async fn delete_application(&self, mut params: Params) -> Result<ApiResponse> {
        let app_id = params.take_required("app_id")?;
        self.delete(&format!("/Application/{app_id}/"), params).await
    }
}
