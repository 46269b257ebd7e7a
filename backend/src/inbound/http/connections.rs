//! Admin connections report handler.
//!
//! ```text
//! GET /api/v1/admin/connections?userId1=..&userId2=..
//! ```

use actix_web::{get, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::Error;
use crate::domain::ports::ConnectionsReport;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, require_user_id};

/// Query string for the connections report. Both ids are required; they are
/// optional here so a missing one yields the JSON error envelope rather than
/// actix's plain-text rejection.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ConnectionsParams {
    /// First user; the path starts here.
    pub user_id1: Option<String>,
    /// Second user; the path ends here.
    pub user_id2: Option<String>,
}

/// Degree of separation, connection path and follower overlap of two users.
#[utoipa::path(
    get,
    path = "/api/v1/admin/connections",
    params(ConnectionsParams),
    responses(
        (status = 200, description = "Connections report", body = ConnectionsReport),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "One or both users not found", body = Error),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Follow graph unavailable", body = Error)
    ),
    tags = ["connections"],
    operation_id = "getConnections"
)]
#[get("/admin/connections")]
pub async fn get_connections(
    state: web::Data<HttpState>,
    params: web::Query<ConnectionsParams>,
) -> ApiResult<web::Json<ConnectionsReport>> {
    let ConnectionsParams { user_id1, user_id2 } = params.into_inner();
    let user1 = require_user_id(user_id1, FieldName::new("userId1"))?;
    let user2 = require_user_id(user_id2, FieldName::new("userId2"))?;
    let report = state.connections.connections_report(&user1, &user2).await?;
    Ok(web::Json(report))
}
