//! Follower statistics and growth chart handlers.
//!
//! ```text
//! GET /api/v1/usercharts/followersgrowth/{userId}
//! GET /api/v1/usercharts/followinggrowth/{userId}
//! GET /api/v1/users/{userId}/follow-stats
//! ```

use actix_web::{get, web};

use crate::domain::{Error, FollowStats, MonthlyCount};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_user_id};

const USER_ID: FieldName = FieldName::new("userId");

/// New followers per calendar month, oldest first.
#[utoipa::path(
    get,
    path = "/api/v1/usercharts/followersgrowth/{userId}",
    params(("userId" = String, Path, description = "User whose followers are counted")),
    responses(
        (status = 200, description = "Monthly follower counts", body = [MonthlyCount]),
        (status = 400, description = "Invalid user id", body = Error),
        (status = 404, description = "User not found", body = Error)
    ),
    tags = ["charts"],
    operation_id = "followersGrowth"
)]
#[get("/usercharts/followersgrowth/{user_id}")]
pub async fn followers_growth(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<MonthlyCount>>> {
    let user = parse_user_id(path.into_inner(), USER_ID)?;
    Ok(web::Json(state.follow_stats.followers_growth(&user).await?))
}

/// Users newly followed per calendar month, oldest first.
#[utoipa::path(
    get,
    path = "/api/v1/usercharts/followinggrowth/{userId}",
    params(("userId" = String, Path, description = "User whose follows are counted")),
    responses(
        (status = 200, description = "Monthly following counts", body = [MonthlyCount]),
        (status = 400, description = "Invalid user id", body = Error),
        (status = 404, description = "User not found", body = Error)
    ),
    tags = ["charts"],
    operation_id = "followingGrowth"
)]
#[get("/usercharts/followinggrowth/{user_id}")]
pub async fn following_growth(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<MonthlyCount>>> {
    let user = parse_user_id(path.into_inner(), USER_ID)?;
    Ok(web::Json(state.follow_stats.following_growth(&user).await?))
}

/// Follower and following totals.
#[utoipa::path(
    get,
    path = "/api/v1/users/{userId}/follow-stats",
    params(("userId" = String, Path, description = "User to summarise")),
    responses(
        (status = 200, description = "Follow totals", body = FollowStats),
        (status = 400, description = "Invalid user id", body = Error),
        (status = 404, description = "User not found", body = Error)
    ),
    tags = ["charts"],
    operation_id = "followStats"
)]
#[get("/users/{user_id}/follow-stats")]
pub async fn follow_stats(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<FollowStats>> {
    let user = parse_user_id(path.into_inner(), USER_ID)?;
    Ok(web::Json(state.follow_stats.follow_stats(&user).await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockFollowStatsQuery;
    use crate::inbound::http::test_utils::TestPorts;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::{Value, json};

    async fn get(stats: MockFollowStatsQuery, uri: &str) -> (StatusCode, Value) {
        let state = TestPorts {
            follow_stats: stats,
            ..TestPorts::default()
        }
        .into_state();
        let app = actix_test::init_service(
            App::new().app_data(web::Data::new(state)).service(
                web::scope("/api/v1")
                    .service(followers_growth)
                    .service(following_growth)
                    .service(follow_stats),
            ),
        )
        .await;
        let response =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
                .await;
        let status = response.status();
        (status, actix_test::read_body_json(response).await)
    }

    #[rstest]
    #[actix_web::test]
    async fn followers_growth_lists_months() {
        let mut stats = MockFollowStatsQuery::new();
        stats.expect_followers_growth().times(1).return_once(|_| {
            Ok(vec![MonthlyCount {
                year: 2024,
                month: 5,
                count: 3,
            }])
        });

        let (status, body) = get(stats, "/api/v1/usercharts/followersgrowth/u-1").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([{ "year": 2024, "month": 5, "count": 3 }]));
    }

    #[rstest]
    #[actix_web::test]
    async fn following_growth_reports_missing_user() {
        let mut stats = MockFollowStatsQuery::new();
        stats
            .expect_following_growth()
            .times(1)
            .return_once(|_| Err(Error::not_found("user not found")));

        let (status, body) = get(stats, "/api/v1/usercharts/followinggrowth/ghost").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], json!("not_found"));
    }

    #[rstest]
    #[actix_web::test]
    async fn follow_stats_are_camel_case() {
        let mut stats = MockFollowStatsQuery::new();
        stats.expect_follow_stats().times(1).return_once(|_| {
            Ok(FollowStats {
                followers_count: 7,
                following_count: 9,
            })
        });

        let (status, body) = get(stats, "/api/v1/users/u-1/follow-stats").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "followersCount": 7, "followingCount": 9 }));
    }

    #[rstest]
    #[actix_web::test]
    async fn padded_path_id_is_rejected() {
        let (status, body) = get(
            MockFollowStatsQuery::new(),
            "/api/v1/users/%20u-1/follow-stats",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"]["code"], json!("invalid_user_id"));
    }
}
