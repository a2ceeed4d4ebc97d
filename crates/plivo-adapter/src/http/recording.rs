/*
[INPUT]:  Recording filters and recording ids
[OUTPUT]: Recording listings and deletion responses
[POS]:    HTTP layer - recording endpoints
[UPDATE]: When adding recording endpoints or changing their paths
*/

use crate::http::{PlivoClient, Result};
use crate::types::{ApiResponse, Params};

impl PlivoClient {
    /// List recordings
    ///
    /// GET /Recording/
    pub async fn get_recordings(&self, params: Params) -> Result<ApiResponse> {
        self.get("/Recording/", params).await
    }

    /// GET /Recording/{recording_id}/
    pub async fn get_recording(&self, mut params: Params) -> Result<ApiResponse> {
        let recording_id = params.take_required("recording_id")?;
        self.get(&format!("/Recording/{recording_id}/"), params).await
    }

    /// DELETE /Recording/{recording_id}/
    pub async fn delete_recording(&self, mut params: Params) -> Result<ApiResponse> {
        let recording_id = params.take_required("recording_id")?;
        self.delete(&format!("/Recording/{recording_id}/"), params).await
    }
}
