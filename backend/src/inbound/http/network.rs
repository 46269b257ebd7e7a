//! Network listing handler.
//!
//! ```text
//! GET /api/v1/users/{userId}/network?tab=following|followers|recommended
//! ```

use actix_web::{get, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::{Error, NetworkEntry, NetworkTab};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_user_id};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NetworkParams {
    /// `following`, `followers` or `recommended`; anything else lists
    /// recommendations.
    pub tab: Option<String>,
}

/// Users in one slice of a user's network.
#[utoipa::path(
    get,
    path = "/api/v1/users/{userId}/network",
    params(("userId" = String, Path, description = "User whose network is listed"), NetworkParams),
    responses(
        (status = 200, description = "Network entries", body = [NetworkEntry]),
        (status = 400, description = "Invalid user id", body = Error),
        (status = 404, description = "User not found", body = Error)
    ),
    tags = ["network"],
    operation_id = "listNetwork"
)]
#[get("/users/{user_id}/network")]
pub async fn list_network(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    params: web::Query<NetworkParams>,
) -> ApiResult<web::Json<Vec<NetworkEntry>>> {
    let user = parse_user_id(path.into_inner(), FieldName::new("userId"))?;
    let tab = NetworkTab::parse_lenient(params.tab.as_deref());
    Ok(web::Json(state.network.network(&user, tab).await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockNetworkQuery;
    use crate::domain::{DisplayName, UserId};
    use crate::inbound::http::test_utils::TestPorts;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::{Value, json};

    async fn get(network: MockNetworkQuery, uri: &str) -> (StatusCode, Value) {
        let state = TestPorts {
            network,
            ..TestPorts::default()
        }
        .into_state();
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(web::scope("/api/v1").service(list_network)),
        )
        .await;
        let response =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
                .await;
        let status = response.status();
        (status, actix_test::read_body_json(response).await)
    }

    #[rstest]
    #[case("/api/v1/users/u-1/network?tab=followers", NetworkTab::Followers)]
    #[case("/api/v1/users/u-1/network?tab=following", NetworkTab::Following)]
    #[case("/api/v1/users/u-1/network?tab=popular", NetworkTab::Recommended)]
    #[case("/api/v1/users/u-1/network", NetworkTab::Recommended)]
    #[actix_web::test]
    async fn tab_selects_listing(#[case] uri: &str, #[case] expected: NetworkTab) {
        let mut network = MockNetworkQuery::new();
        network
            .expect_network()
            .withf(move |_, tab| *tab == expected)
            .times(1)
            .return_once(|_, _| {
                Ok(vec![NetworkEntry {
                    id: UserId::new("u-2").expect("id"),
                    display_name: DisplayName::new("Bea").expect("name"),
                    is_mutual: true,
                }])
            });

        let (status, body) = get(network, uri).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([{ "id": "u-2", "displayName": "Bea", "isMutual": true }])
        );
    }
}
