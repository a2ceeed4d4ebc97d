/*
[INPUT]:  Carrier and routing definitions, carrier/routing ids
[OUTPUT]: Incoming/outgoing carrier and routing management responses
[POS]:    HTTP layer - carrier endpoints
[UPDATE]: When adding carrier endpoints or changing their paths
*/

use crate::http::{PlivoClient, Result};
use crate::types::{ApiResponse, Params};

impl PlivoClient {
    /// List incoming carriers
    ///
    /// GET /IncomingCarrier/
    pub async fn get_incoming_carriers(&self, params: Params) -> Result<ApiResponse> {
        self.get("/IncomingCarrier/", params).await
    }

    /// POST /IncomingCarrier/
    pub async fn create_incoming_carrier(&self, params: Params) -> Result<ApiResponse> {
        self.post("/IncomingCarrier/", params).await
    }

    /// GET /IncomingCarrier/{carrier_id}/
    pub async fn get_incoming_carrier(&self, mut params: Params) -> Result<ApiResponse> {
        let carrier_id = params.take_required("carrier_id")?;
        self.get(&format!("/IncomingCarrier/{carrier_id}/"), params).await
    }

    /// POST /IncomingCarrier/{carrier_id}/
    pub async fn modify_incoming_carrier(&self, mut params: Params) -> Result<ApiResponse> {
        let carrier_id = params.take_required("carrier_id")?;
        self.post(&format!("/IncomingCarrier/{carrier_id}/"), params).await
    }

    /// DELETE /IncomingCarrier/{carrier_id}/
    pub async fn delete_incoming_carrier(&self, mut params: Params) -> Result<ApiResponse> {
        let carrier_id = params.take_required("carrier_id")?;
        self.delete(&format!("/IncomingCarrier/{carrier_id}/"), params).await
    }

    /// List outgoing carriers
    ///
    /// GET /OutgoingCarrier/
    pub async fn get_outgoing_carriers(&self, params: Params) -> Result<ApiResponse> {
        self.get("/OutgoingCarrier/", params).await
    }

    /// POST /OutgoingCarrier/
    pub async fn create_outgoing_carrier(&self, params: Params) -> Result<ApiResponse> {
        self.post("/OutgoingCarrier/", params).await
    }

    /// GET /OutgoingCarrier/{carrier_id}/
    pub async fn get_outgoing_carrier(&self, mut params: Params) -> Result<ApiResponse> {
        let carrier_id = params.take_required("carrier_id")?;
        self.get(&format!("/OutgoingCarrier/{carrier_id}/"), params).await
    }

    /// POST /OutgoingCarrier/{carrier_id}/
    pub async fn modify_outgoing_carrier(&self, mut params: Params) -> Result<ApiResponse> {
        let carrier_id = params.take_required("carrier_id")?;
        self.post(&format!("/OutgoingCarrier/{carrier_id}/"), params).await
    }

    /// DELETE /OutgoingCarrier/{carrier_id}/
    pub async fn delete_outgoing_carrier(&self, mut params: Params) -> Result<ApiResponse> {
        let carrier_id = params.take_required("carrier_id")?;
        self.delete(&format!("/OutgoingCarrier/{carrier_id}/"), params).await
    }

    /// List outgoing carrier routes
    ///
    /// GET /OutgoingCarrierRouting/
    pub async fn get_outgoing_carrier_routings(&self, params: Params) -> Result<ApiResponse> {
        self.get("/OutgoingCarrierRouting/", params).await
    }

    /// POST /OutgoingCarrierRouting/
    pub async fn create_outgoing_carrier_routing(&self, params: Params) -> Result<ApiResponse> {
        self.post("/OutgoingCarrierRouting/", params).await
    }

    /// GET /OutgoingCarrierRouting/{routing_id}/
    pub async fn get_outgoing_carrier_routing(&self, mut params: Params) -> Result<ApiResponse> {
        let routing_id = params.take_required("routing_id")?;
        self.get(&format!("/OutgoingCarrierRouting/{routing_id}/"), params).await
    }

    /// POST /OutgoingCarrierRouting/{routing_id}/
    pub async fn modify_outgoing_carrier_routing(&self, mut params: Params) -> Result<ApiResponse> {
        let routing_id = params.take_required("routing_id")?;
        self.post(&format!("/OutgoingCarrierRouting/{routing_id}/"), params).await
    }

    /// DELETE /OutgoingCarrierRouting/{routing_id}/
    pub async fn delete_outgoing_carrier_routing(&self, mut params: Params) -> Result<ApiResponse> {
        let routing_id = params.take_required("routing_id")?;
        self.delete(&format!("/OutgoingCarrierRouting/{routing_id}/"), params).await
    }
}
