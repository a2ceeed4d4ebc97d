/*
[INPUT]:  Account and subaccount parameters
[OUTPUT]: Account details and subaccount management responses
[POS]:    HTTP layer - account endpoints
[UPDATE]: When adding account endpoints or changing their paths
*/

use crate::http::{PlivoClient, Result};
use crate::types::{ApiResponse, Params};

impl PlivoClient {
    /// Get account details
    ///
    /// GET /
    pub async fn get_account(&self, params: Params) -> Result<ApiResponse> {
        self.get("", params).await
    }

    /// Modify account details
    ///
    /// POST /
    pub async fn modify_account(&self, params: Params) -> Result<ApiResponse> {
        self.post("", params).await
    }

    /// List subaccounts
    ///
    /// GET /Subaccount/
    pub async fn get_subaccounts(&self, params: Params) -> Result<ApiResponse> {
        self.get("/Subaccount/", params).await
    }

    /// Create a subaccount
    ///
    /// POST /Subaccount/
    pub async fn create_subaccount(&self, params: Params) -> Result<ApiResponse> {
        self.post("/Subaccount/", params).await
    }

    /// Get one subaccount
    ///
    /// GET /Subaccount/{subauth_id}/
    pub async fn get_subaccount(&self, mut params: Params) -> Result<ApiResponse> {
        let subauth_id = params.take_required("subauth_id")?;
        self.get(&format!("/Subaccount/{subauth_id}/"), params).await
    }

    /// Modify a subaccount
    ///
    /// POST /Subaccount/{subauth_id}/
    pub async fn modify_subaccount(&self, mut params: Params) -> Result<ApiResponse> {
        let subauth_id = params.take_required("subauth_id")?;
        self.post(&format!("/Subaccount/{subauth_id}/"), params).await
    }

    /// Delete a subaccount
    ///
    /// DELETE /Subaccount/{subauth_id}/
    pub async fn delete_subaccount(&self, mut params: Params) -> Result<ApiResponse> {
        let subauth_id = params.take_required("subauth_id")?;
        self.delete(&format!("/Subaccount/{subauth_id}/"), params).await
    }
}
