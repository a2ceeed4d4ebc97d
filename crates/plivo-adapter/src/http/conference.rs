/*
[INPUT]:  Conference names, member ids and member action parameters
[OUTPUT]: Live conference state and conference/member control responses
[POS]:    HTTP layer - conference endpoints
[UPDATE]: When adding conference endpoints or changing their paths
*/

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::Method;

use crate::http::{PlivoClient, Result};
use crate::types::{ApiResponse, Params};

/// Characters left as-is in a conference name path segment (RFC 3986 unreserved)
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode free text for use as one URL path segment
pub fn encode_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

impl PlivoClient {
    /// List conferences in progress
    ///
    /// GET /Conference/
    pub async fn get_live_conferences(&self, params: Params) -> Result<ApiResponse> {
        self.get("/Conference/", params).await
    }

    /// DELETE /Conference/
    pub async fn hangup_all_conferences(&self, params: Params) -> Result<ApiResponse> {
        self.delete("/Conference/", params).await
    }

    /// GET /Conference/{conference_name}/
    pub async fn get_live_conference(&self, mut params: Params) -> Result<ApiResponse> {
        let name = take_conference_name(&mut params)?;
        self.get(&format!("/Conference/{name}/"), params).await
    }

    /// DELETE /Conference/{conference_name}/
    pub async fn hangup_conference(&self, mut params: Params) -> Result<ApiResponse> {
        let name = take_conference_name(&mut params)?;
        self.delete(&format!("/Conference/{name}/"), params).await
    }

    /// DELETE /Conference/{conference_name}/Member/{member_id}/
    pub async fn hangup_member(&self, params: Params) -> Result<ApiResponse> {
        self.member_action(Method::DELETE, None, params).await
    }

    /// POST /Conference/{conference_name}/Member/{member_id}/Play/
    pub async fn play_member(&self, params: Params) -> Result<ApiResponse> {
        self.member_action(Method::POST, Some("Play"), params).await
    }

    /// DELETE /Conference/{conference_name}/Member/{member_id}/Play/
    pub async fn stop_play_member(&self, params: Params) -> Result<ApiResponse> {
        self.member_action(Method::DELETE, Some("Play"), params).await
    }

    /// POST /Conference/{conference_name}/Member/{member_id}/Speak/
    pub async fn speak_member(&self, params: Params) -> Result<ApiResponse> {
        self.member_action(Method::POST, Some("Speak"), params).await
    }

    /// POST /Conference/{conference_name}/Member/{member_id}/Deaf/
    pub async fn deaf_member(&self, params: Params) -> Result<ApiResponse> {
        self.member_action(Method::POST, Some("Deaf"), params).await
    }

    /// DELETE /Conference/{conference_name}/Member/{member_id}/Deaf/
    pub async fn undeaf_member(&self, params: Params) -> Result<ApiResponse> {
        self.member_action(Method::DELETE, Some("Deaf"), params).await
    }

    /// POST /Conference/{conference_name}/Member/{member_id}/Mute/
    pub async fn mute_member(&self, params: Params) -> Result<ApiResponse> {
        self.member_action(Method::POST, Some("Mute"), params).await
    }

    /// DELETE /Conference/{conference_name}/Member/{member_id}/Mute/
    pub async fn unmute_member(&self, params: Params) -> Result<ApiResponse> {
        self.member_action(Method::DELETE, Some("Mute"), params).await
    }

    /// POST /Conference/{conference_name}/Member/{member_id}/Kick/
    pub async fn kick_member(&self, params: Params) -> Result<ApiResponse> {
        self.member_action(Method::POST, Some("Kick"), params).await
    }

    /// Start recording a conference
    ///
    /// POST /Conference/{conference_name}/Record/
    pub async fn record_conference(&self, mut params: Params) -> Result<ApiResponse> {
        let name = take_conference_name(&mut params)?;
        self.post(&format!("/Conference/{name}/Record/"), params).await
    }

    /// DELETE /Conference/{conference_name}/Record/
    pub async fn stop_record_conference(&self, mut params: Params) -> Result<ApiResponse> {
        let name = take_conference_name(&mut params)?;
        self.delete(&format!("/Conference/{name}/Record/"), params).await
    }

    /// `member_id` may be a single id, a comma separated list or `all`
    async fn member_action(
        &self,
        method: Method,
        action: Option<&str>,
        mut params: Params,
    ) -> Result<ApiResponse> {
        let name = take_conference_name(&mut params)?;
        let member_id = params.take_required("member_id")?;
        let path = match action {
            Some(action) => format!("/Conference/{name}/Member/{member_id}/{action}/"),
            None => format!("/Conference/{name}/Member/{member_id}/"),
        };
        self.request(method, &path, params).await
    }
}

fn take_conference_name(params: &mut Params) -> Result<String> {
    let name = params.take_required("conference_name")?;
    Ok(encode_path_segment(&name))
}
