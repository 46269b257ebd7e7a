//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

use state_builders::{build_adapters, build_http_state};

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use towntalk::Trace;
#[cfg(debug_assertions)]
use towntalk::doc::ApiDoc;
use towntalk::inbound::http::api_scope;
use towntalk::inbound::http::health::{HealthState, live, ready};
use towntalk::inbound::http::state::HttpState;
use towntalk::seeding::seed_graph_on_startup;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api_scope())
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Apply the configured seed, bind the listener and mark the service ready.
///
/// # Errors
/// Propagates [`std::io::Error`] when seeding fails or binding the socket
/// fails.
pub async fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let adapters = build_adapters(&config);
    seed_graph_on_startup(
        config.seed_file.as_deref(),
        adapters.follows.clone(),
        adapters.users.clone(),
    )
    .await
    .map_err(std::io::Error::other)?;
    let http_state = build_http_state(&adapters, config.limits);
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || build_app(server_health_state.clone(), http_state.clone()))
        .bind(config.bind_addr)?
        .run();

    health_state.mark_ready();
    Ok(server)
}
