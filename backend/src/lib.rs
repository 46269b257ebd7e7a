//! TownTalk social graph service.
//!
//! - [`domain`]: connection finder, reports and follow services behind ports.
//! - [`inbound`]: actix-web handlers.
//! - [`outbound`]: Diesel and in-memory adapters.
//! - [`seeding`]: optional startup load of a JSON seed graph.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod seeding;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
