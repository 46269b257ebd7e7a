//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects every `#[utoipa::path]` handler and the schemas they
//! reference. Swagger UI serves it in debug builds and the `openapi-dump`
//! binary prints it for external tooling.

use utoipa::OpenApi;

use crate::domain::ports::ConnectionsReport;
use crate::domain::{
    Error, ErrorCode, FollowStats, FollowToggleOutcome, MonthlyCount, NetworkEntry, NetworkTab,
    User,
};
use crate::inbound::http::follows::ToggleFollowRequest;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "TownTalk social graph API",
        description = "Connection reports, follow management and network listings for TownTalk users."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::connections::get_connections,
        crate::inbound::http::follows::toggle_follow,
        crate::inbound::http::charts::followers_growth,
        crate::inbound::http::charts::following_growth,
        crate::inbound::http::charts::follow_stats,
        crate::inbound::http::network::list_network,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ConnectionsReport,
        User,
        Error,
        ErrorCode,
        FollowStats,
        FollowToggleOutcome,
        MonthlyCount,
        NetworkEntry,
        NetworkTab,
        ToggleFollowRequest,
    )),
    tags(
        (name = "connections", description = "Degrees of separation between users"),
        (name = "follows", description = "Following and unfollowing users"),
        (name = "charts", description = "Follow counts and monthly growth"),
        (name = "network", description = "Followers, following and recommendations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
