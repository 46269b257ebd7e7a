//! Follow toggle handler.
//!
//! ```text
//! POST /api/v1/follows/toggle {"followerId":"..","followedId":".."}
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, FollowToggleOutcome};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, require_user_id};

/// Request body for `POST /api/v1/follows/toggle`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ToggleFollowRequest {
    /// Acting user.
    pub follower_id: Option<String>,
    /// User to follow or unfollow.
    pub followed_id: Option<String>,
}

/// Follow a user, or unfollow them if already followed.
#[utoipa::path(
    post,
    path = "/api/v1/follows/toggle",
    request_body = ToggleFollowRequest,
    responses(
        (status = 200, description = "Follow state after the toggle", body = FollowToggleOutcome),
        (status = 400, description = "Invalid request or self-follow", body = Error),
        (status = 404, description = "User not found", body = Error),
        (status = 503, description = "Service unavailable", body = Error)
    ),
    tags = ["follows"],
    operation_id = "toggleFollow"
)]
#[post("/follows/toggle")]
pub async fn toggle_follow(
    state: web::Data<HttpState>,
    payload: web::Json<ToggleFollowRequest>,
) -> ApiResult<web::Json<FollowToggleOutcome>> {
    let ToggleFollowRequest {
        follower_id,
        followed_id,
    } = payload.into_inner();
    let follower = require_user_id(follower_id, FieldName::new("followerId"))?;
    let followed = require_user_id(followed_id, FieldName::new("followedId"))?;
    let outcome = state.follows.toggle_follow(&follower, &followed).await?;
    Ok(web::Json(outcome))
}
