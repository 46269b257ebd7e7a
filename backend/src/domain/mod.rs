//! Domain primitives, ports and services for the social graph.
//!
//! Purpose: model users and follow edges, find connections between users over
//! the follow graph, and expose the driving ports the HTTP adapter calls.
//! Nothing here knows about actix or diesel; adapters plug in through
//! [`ports`].
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic error payload.
//! - UserId, DisplayName, User: user identity as shown in reports.
//! - FollowEdge, MonthlyCount, NetworkTab, NetworkEntry: follow read models.
//! - ConnectionGraphService: BFS degree of separation and connection path.
//! - ConnectionsReportService, FollowService: driving port implementations.
//! - GraphSeeder: bulk loading of users and edges at startup.

pub mod connections;
pub mod connections_report;
pub mod error;
pub mod follow;
pub mod follow_service;
pub mod graph_seed;
pub mod ports;
pub(crate) mod service_support;
#[cfg(test)]
pub(crate) mod test_support;
pub mod trace_id;
pub mod user;

pub use self::connections::{
    ConnectionGraphError, ConnectionGraphService, ConnectionPath, DEFAULT_MAX_VISITED,
    Separation, TraversalLimits, intersect_followers,
};
pub use self::connections_report::{ConnectionsReportService, USERS_NOT_FOUND_MESSAGE};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::follow::{
    FollowEdge, FollowStats, FollowToggleOutcome, MonthlyCount, NetworkEntry, NetworkTab,
    group_by_month,
};
pub use self::follow_service::{FollowService, RECOMMENDATION_SEEDS};
pub use self::graph_seed::{
    GraphSeedError, GraphSeedOutcome, GraphSeeder, SeedFollow, SeedGraph, SeedUser,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{DISPLAY_NAME_MAX, DisplayName, User, UserId, UserValidationError};

