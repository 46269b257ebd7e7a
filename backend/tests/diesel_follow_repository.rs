//! Integration tests for the Diesel adapters against embedded PostgreSQL.
//!
//! Each test runs on its own database cloned from a migrated template. The
//! suite keeps synchronous test bodies and drives the async adapters on a
//! runtime owned by the test context, because the embedded cluster bootstrap
//! must not run inside a Tokio runtime.

use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use pg_embedded_setup_unpriv::TemporaryDatabase;
use rstest::{fixture, rstest};
use tokio::runtime::Runtime;

use towntalk::domain::ports::{
    FollowGraphStore, FollowRepository, FollowRepositoryError, UserRepository,
};
use towntalk::domain::{
    ConnectionGraphService, FollowEdge, GraphSeeder, SeedGraph, Separation, User, UserId,
};
use towntalk::outbound::persistence::{
    DbPool, DieselFollowRepository, DieselUserRepository, PoolConfig,
};

mod support;

use support::{drop_table, handle_cluster_setup_failure, provision_template_database, shared_cluster};

struct DieselWorld {
    runtime: Runtime,
    follows: DieselFollowRepository,
    users: DieselUserRepository,
    database_url: String,
    _database: TemporaryDatabase,
}

impl DieselWorld {
    fn run<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    fn with_users(&self, users: &[(&str, &str)]) {
        self.run(async {
            for (raw, name) in users {
                let user = User::try_from_strings(*raw, *name).expect("valid user");
                self.users.upsert(&user).await.expect("upsert user");
            }
        });
    }
}

fn setup_world() -> Result<DieselWorld, String> {
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let cluster = shared_cluster()?;
    let database = provision_template_database(cluster)?;
    let database_url = database.url().to_string();

    let config = PoolConfig::new(&database_url)
        .with_max_size(2)
        .with_min_idle(Some(1));
    let pool = runtime
        .block_on(DbPool::new(config))
        .map_err(|err| err.to_string())?;

    Ok(DieselWorld {
        runtime,
        follows: DieselFollowRepository::new(pool.clone()),
        users: DieselUserRepository::new(pool),
        database_url,
        _database: database,
    })
}

#[fixture]
fn diesel_world() -> Option<DieselWorld> {
    match setup_world() {
        Ok(world) => Some(world),
        Err(reason) => handle_cluster_setup_failure(reason),
    }
}

fn id(raw: &str) -> UserId {
    UserId::new(raw).expect("valid id")
}

fn at(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, day, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

fn edge(follower: &str, followed: &str, day: u32) -> FollowEdge {
    FollowEdge::new(id(follower), id(followed), at(day))
}

const PEOPLE: &[(&str, &str)] = &[("ann", "Ann"), ("bob", "Bob"), ("cat", "Cat")];

#[rstest]
fn repeated_insert_keeps_the_first_timestamp(diesel_world: Option<DieselWorld>) {
    let Some(world) = diesel_world else {
        eprintln!("SKIP-TEST-CLUSTER: repeated_insert_keeps_the_first_timestamp skipped");
        return;
    };
    world.with_users(PEOPLE);

    let edges = world.run(async {
        world.follows.insert(&edge("ann", "bob", 3)).await.expect("first insert");
        world.follows.insert(&edge("ann", "bob", 20)).await.expect("second insert");
        world.follows.edges_from(&id("ann")).await.expect("edges")
    });

    assert_eq!(edges, vec![edge("ann", "bob", 3)]);
}

#[rstest]
fn neighbour_sets_follow_edge_direction(diesel_world: Option<DieselWorld>) {
    let Some(world) = diesel_world else {
        eprintln!("SKIP-TEST-CLUSTER: neighbour_sets_follow_edge_direction skipped");
        return;
    };
    world.with_users(PEOPLE);

    let (followers, following, exists, reverse) = world.run(async {
        for e in [edge("ann", "bob", 1), edge("cat", "bob", 2), edge("bob", "cat", 4)] {
            world.follows.insert(&e).await.expect("insert");
        }
        (
            world.follows.followers(&id("bob")).await.expect("followers"),
            world.follows.following(&id("bob")).await.expect("following"),
            world.follows.exists(&id("ann"), &id("bob")).await.expect("exists"),
            world.follows.exists(&id("bob"), &id("ann")).await.expect("exists"),
        )
    });

    assert_eq!(followers, HashSet::from([id("ann"), id("cat")]));
    assert_eq!(following, HashSet::from([id("cat")]));
    assert!(exists);
    assert!(!reverse);
}

#[rstest]
fn delete_reports_whether_a_row_was_removed(diesel_world: Option<DieselWorld>) {
    let Some(world) = diesel_world else {
        eprintln!("SKIP-TEST-CLUSTER: delete_reports_whether_a_row_was_removed skipped");
        return;
    };
    world.with_users(PEOPLE);

    let (first, second, still_there) = world.run(async {
        world.follows.insert(&edge("ann", "bob", 1)).await.expect("insert");
        (
            world.follows.delete(&id("ann"), &id("bob")).await.expect("delete"),
            world.follows.delete(&id("ann"), &id("bob")).await.expect("delete"),
            world.follows.exists(&id("ann"), &id("bob")).await.expect("exists"),
        )
    });

    assert!(first);
    assert!(!second);
    assert!(!still_there);
}

#[rstest]
fn incoming_edges_are_ordered_by_follow_time(diesel_world: Option<DieselWorld>) {
    let Some(world) = diesel_world else {
        eprintln!("SKIP-TEST-CLUSTER: incoming_edges_are_ordered_by_follow_time skipped");
        return;
    };
    world.with_users(&[("ann", "Ann"), ("bob", "Bob"), ("cat", "Cat"), ("dan", "Dan")]);

    let edges = world.run(async {
        for e in [edge("dan", "bob", 17), edge("ann", "bob", 2), edge("cat", "bob", 9)] {
            world.follows.insert(&e).await.expect("insert");
        }
        world.follows.edges_to(&id("bob")).await.expect("edges")
    });

    let followers: Vec<&str> = edges.iter().map(|e| e.follower().as_ref()).collect();
    assert_eq!(followers, ["ann", "cat", "dan"]);
    assert_eq!(edges[2].followed_at(), at(17));
}

#[rstest]
fn upsert_renames_and_lookups_skip_unknown_ids(diesel_world: Option<DieselWorld>) {
    let Some(world) = diesel_world else {
        eprintln!("SKIP-TEST-CLUSTER: upsert_renames_and_lookups_skip_unknown_ids skipped");
        return;
    };
    world.with_users(PEOPLE);
    world.with_users(&[("ann", "Annie")]);

    let (renamed, found, empty) = world.run(async {
        (
            world.users.find_by_id(&id("ann")).await.expect("lookup"),
            world
                .users
                .find_many(&[id("bob"), id("nobody"), id("ann")])
                .await
                .expect("lookup"),
            world.users.find_many(&[]).await.expect("lookup"),
        )
    });

    assert_eq!(
        renamed.map(|user| user.display_name().as_ref().to_owned()),
        Some("Annie".to_owned())
    );
    let names: HashSet<&str> = found.iter().map(|u| u.display_name().as_ref()).collect();
    assert_eq!(names, HashSet::from(["Annie", "Bob"]));
    assert!(empty.is_empty());
}

#[rstest]
fn missing_follows_table_surfaces_as_a_query_error(diesel_world: Option<DieselWorld>) {
    let Some(world) = diesel_world else {
        eprintln!("SKIP-TEST-CLUSTER: missing_follows_table_surfaces_as_a_query_error skipped");
        return;
    };
    world.with_users(PEOPLE);
    drop_table(&world.database_url, "user_follows").expect("drop succeeds");

    let result = world.run(world.follows.insert(&edge("ann", "bob", 1)));

    assert!(
        matches!(result, Err(FollowRepositoryError::Query { .. })),
        "expected Query error, got: {result:?}"
    );
}

#[rstest]
fn seeded_database_answers_connection_searches(diesel_world: Option<DieselWorld>) {
    let Some(world) = diesel_world else {
        eprintln!("SKIP-TEST-CLUSTER: seeded_database_answers_connection_searches skipped");
        return;
    };
    let seed = SeedGraph::from_json(
        r#"{
            "users": [
                {"id": "ann", "displayName": "Ann"},
                {"id": "bob", "displayName": "Bob"},
                {"id": "cat", "displayName": "Cat"},
                {"id": "dan", "displayName": "Dan"}
            ],
            "follows": [
                {"followerId": "ann", "followedId": "bob", "followedAt": "2024-01-01T00:00:00Z"},
                {"followerId": "cat", "followedId": "bob", "followedAt": "2024-01-02T00:00:00Z"},
                {"followerId": "cat", "followedId": "dan", "followedAt": "2024-01-03T00:00:00Z"}
            ]
        }"#,
    )
    .expect("valid seed");
    let follows = Arc::new(world.follows.clone());
    let users = Arc::new(world.users.clone());

    let (outcome, degree) = world.run(async {
        let outcome = GraphSeeder::new(follows.clone(), users)
            .apply(&seed)
            .await
            .expect("seed applies");
        let degree = ConnectionGraphService::new(follows)
            .degree_of_separation(&id("ann"), &id("dan"))
            .await
            .expect("degree");
        (outcome, degree)
    });

    assert_eq!((outcome.users, outcome.follows), (4, 3));
    assert_eq!(degree, Separation::Connected(3));
}
