mod common;

use axum::http::StatusCode;
use axum::{Router, middleware};
use axum_test::TestServer;
use golf_practice::api;
use golf_practice::api::middleware::auth;
use golf_practice::state::AppState;
use serde_json::Value;

/// API routes behind Bearer auth, without rate limiting.
fn make_server(state: AppState) -> TestServer {
    let api_router = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let app = Router::new().nest("/api", api_router).with_state(state);
    TestServer::new(app).unwrap()
}

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

async fn seeded() -> (TestServer, String) {
    let pool = common::setup_pool().await;
    let state = common::create_test_state(pool.clone());
    let alice = common::create_test_user(&state, "alice").await;
    let token = common::login(&state, "alice").await;

    common::create_test_club(&pool, alice, "Putter", None, None).await;
    let sw = common::create_test_club(&pool, alice, "Sand Wedge", None, Some(54.0)).await;
    common::create_test_club(&pool, alice, "Driver", None, None).await;
    let gw = common::create_test_club(&pool, alice, "Gap Wedge", None, Some(50.0)).await;

    common::create_test_shot(&pool, gw, "2025-06-01", 100.0, "pull left").await;
    common::create_test_shot(&pool, gw, "2025-06-01", 110.0, "straight").await;
    common::create_test_shot(&pool, gw, "2025-06-02", 120.0, "block right").await;
    common::create_test_shot(&pool, sw, "2025-06-02", 80.0, "").await;

    (make_server(state), token)
}

#[tokio::test]
async fn test_requires_bearer_token() {
    let (server, _) = seeded().await;

    for path in ["/api/clubs", "/api/stats", "/api/dispersion"] {
        let response = server.get(path).await;
        response.assert_status(StatusCode::UNAUTHORIZED);
        assert_eq!(response.header("www-authenticate"), "Bearer");

        let json = response.json::<Value>();
        assert_eq!(json["error"]["code"], "unauthorized");
    }

    server
        .get("/api/clubs")
        .add_header("Authorization", bearer("forged"))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_clubs_in_bag_order() {
    let (server, token) = seeded().await;

    let response = server
        .get("/api/clubs")
        .add_header("Authorization", bearer(&token))
        .await;
    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["total"], 4);

    let names: Vec<&str> = json["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Driver", "Gap Wedge", "Sand Wedge", "Putter"]);
    assert_eq!(json["items"][1]["category"], "wedge");
    assert_eq!(json["items"][1]["position"], 1);
}

#[tokio::test]
async fn test_stats() {
    let (server, token) = seeded().await;

    let response = server
        .get("/api/stats")
        .add_header("Authorization", bearer(&token))
        .await;
    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["total_shots"], 4);

    let clubs = json["clubs"].as_array().unwrap();
    assert_eq!(clubs.len(), 4);

    let gap = &clubs[1];
    assert_eq!(gap["name"], "Gap Wedge");
    assert_eq!(gap["shot_count"], 3);
    assert_eq!(gap["average_distance"], 110.0);
    assert_eq!(gap["buckets"]["left"], 1);
    assert_eq!(gap["buckets"]["center"], 1);
    assert_eq!(gap["buckets"]["right"], 1);
    assert_eq!(gap["buckets"]["center-left"], 0);
    assert_eq!(gap["buckets"]["other"], 0);

    let driver = &clubs[0];
    assert_eq!(driver["shot_count"], 0);
    assert!(driver["average_distance"].is_null());
    assert_eq!(driver["buckets"].as_object().unwrap().len(), 6);
}

#[tokio::test]
async fn test_stats_date_filters() {
    let (server, token) = seeded().await;

    let day = server
        .get("/api/stats?date=2025-06-02")
        .add_header("Authorization", bearer(&token))
        .await
        .json::<Value>();
    assert_eq!(day["total_shots"], 2);
    assert_eq!(day["range"]["from"], "2025-06-02");
    assert_eq!(day["range"]["to"], "2025-06-02");

    let range = server
        .get("/api/stats?from=2025-06-01&to=2025-06-01")
        .add_header("Authorization", bearer(&token))
        .await
        .json::<Value>();
    assert_eq!(range["total_shots"], 2);

    let inverted = server
        .get("/api/stats?from=2025-06-02&to=2025-06-01")
        .add_header("Authorization", bearer(&token))
        .await;
    inverted.assert_status_bad_request();
    assert_eq!(inverted.json::<Value>()["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_malformed_date_returns_json_error() {
    let (server, token) = seeded().await;

    for path in ["/api/stats?from=2025-13-40", "/api/dispersion?date=yesterday"] {
        let response = server
            .get(path)
            .add_header("Authorization", bearer(&token))
            .await;
        response.assert_status_bad_request();

        let json = response.json::<Value>();
        assert_eq!(json["error"]["code"], "validation_error", "path: {path}");
        assert_eq!(json["error"]["message"], "Invalid query parameters");
    }
}

#[tokio::test]
async fn test_dispersion() {
    let (server, token) = seeded().await;

    let response = server
        .get("/api/dispersion")
        .add_header("Authorization", bearer(&token))
        .await;
    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["scale_max"], 150.0);
    assert_eq!(json["points"].as_array().unwrap().len(), 4);
    assert_eq!(json["ticks"].as_array().unwrap().len(), 3);

    let legend: Vec<&str> = json["legend"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["label"].as_str().unwrap())
        .collect();
    assert_eq!(legend, vec!["Gap Wedge", "Sand Wedge"]);

    // Identical input, identical layout.
    let again = server
        .get("/api/dispersion")
        .add_header("Authorization", bearer(&token))
        .await
        .json::<Value>();
    assert_eq!(json, again);
}

#[tokio::test]
async fn test_other_users_data_is_invisible() {
    let pool = common::setup_pool().await;
    let state = common::create_test_state(pool.clone());
    let alice = common::create_test_user(&state, "alice").await;
    common::create_test_user(&state, "bob").await;
    let club = common::create_test_club(&pool, alice, "Driver", None, None).await;
    common::create_test_shot(&pool, club, "2025-06-01", 230.0, "fade").await;

    let bob_token = common::login(&state, "bob").await;
    let server = make_server(state);

    let clubs = server
        .get("/api/clubs")
        .add_header("Authorization", bearer(&bob_token))
        .await
        .json::<Value>();
    assert_eq!(clubs["total"], 0);

    let dispersion = server
        .get("/api/dispersion")
        .add_header("Authorization", bearer(&bob_token))
        .await
        .json::<Value>();
    assert!(dispersion["points"].as_array().unwrap().is_empty());
}
