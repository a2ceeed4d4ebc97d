/*
[INPUT]:  Number search filters, phone numbers, number group ids
[OUTPUT]: Number inventory, rental and application-link responses
[POS]:    HTTP layer - number endpoints
[UPDATE]: When adding number endpoints or changing their paths
*/

use crate::http::{PlivoClient, Result};
use crate::types::{ApiResponse, Params};

impl PlivoClient {
    /// List numbers rented on the account
    ///
    /// GET /Number/
    pub async fn get_numbers(&self, params: Params) -> Result<ApiResponse> {
        self.get("/Number/", params).await
    }

    /// Search numbers available for rent
    ///
    /// GET /AvailableNumber/
    pub async fn search_numbers(&self, params: Params) -> Result<ApiResponse> {
        self.get("/AvailableNumber/", params).await
    }

    /// GET /Number/{number}/
    pub async fn get_number(&self, mut params: Params) -> Result<ApiResponse> {
        let number = params.take_required("number")?;
        self.get(&format!("/Number/{number}/"), params).await
    }

    /// POST /Number/{number}/
    pub async fn modify_number(&self, mut params: Params) -> Result<ApiResponse> {
        let number = params.take_required("number")?;
        self.post(&format!("/Number/{number}/"), params).await
    }

    /// Rent an available number
    ///
    /// POST /AvailableNumber/{number}/
    pub async fn rent_number(&self, mut params: Params) -> Result<ApiResponse> {
        let number = params.take_required("number")?;
        self.post(&format!("/AvailableNumber/{number}/"), params).await
    }

    /// Release a rented number
    ///
    /// DELETE /Number/{number}/
    pub async fn unrent_number(&self, mut params: Params) -> Result<ApiResponse> {
        let number = params.take_required("number")?;
        self.delete(&format!("/Number/{number}/"), params).await
    }

    /// GET /PhoneNumber/
    pub async fn search_phone_numbers(&self, params: Params) -> Result<ApiResponse> {
        self.get("/PhoneNumber/", params).await
    }

    /// POST /PhoneNumber/{number}/
    pub async fn buy_phone_number(&self, mut params: Params) -> Result<ApiResponse> {
        let number = params.take_required("number")?;
        self.post(&format!("/PhoneNumber/{number}/"), params).await
    }

    /// Attach an application to a number (pass `app_id`)
    ///
    /// POST /Number/{number}/
    pub async fn link_application_number(&self, mut params: Params) -> Result<ApiResponse> {
        let number = params.take_required("number")?;
        self.post(&format!("/Number/{number}/"), params).await
    }

    /// Detach whatever application is linked to a number
    ///
    /// POST /Number/{number}/ with body `{"app_id": ""}`; other params are ignored.
    pub async fn unlink_application_number(&self, mut params: Params) -> Result<ApiResponse> {
        let number = params.take_required("number")?;
        let params = Params::new().with("app_id", "");
        self.post(&format!("/Number/{number}/"), params).await
    }

    /// GET /AvailableNumberGroup/
    pub async fn get_number_group(&self, params: Params) -> Result<ApiResponse> {
        self.get("/AvailableNumberGroup/", params).await
    }

    /// GET /AvailableNumberGroup/{group_id}/
    pub async fn get_number_group_details(&self, mut params: Params) -> Result<ApiResponse> {
        let group_id = params.take_required("group_id")?;
        self.get(&format!("/AvailableNumberGroup/{group_id}/"), params).await
    }

    /// POST /AvailableNumberGroup/{group_id}/
    pub async fn rent_from_number_group(&self, mut params: Params) -> Result<ApiResponse> {
        let group_id = params.take_required("group_id")?;
        self.post(&format!("/AvailableNumberGroup/{group_id}/"), params).await
    }
}
