use axum::http::StatusCode;
use golfbank::api::{self, AppState};
use golfbank::config::Config;
use golfbank::datasource::MockCourseDb;
use golfbank::db::{init_db, Repository};
use golfbank::orchestration::Resettler;
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

async fn setup_test_app() -> (axum::Router, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir
        .path()
        .join("test.db")
        .to_string_lossy()
        .to_string();

    let pool = init_db(&db_path).await.expect("init_db failed");
    let repo = Arc::new(Repository::new(pool));
    let resettler = Arc::new(Resettler::new(repo.clone()));

    let config = Config {
        port: 0,
        database_path: db_path,
        course_db_path: "unused.csv".to_string(),
        players_csv_path: None,
        viewer_base_url: "http://viewer.test".to_string(),
        utc_offset_hours: 8,
    };

    let state = AppState::new(
        repo,
        config,
        Arc::new(MockCourseDb::with_standard_course()),
        resettler,
        Arc::new(vec!["Alice".to_string(), "Bob".to_string()]),
    );

    (api::create_router(state), temp_dir)
}

async fn send(app: &axum::Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = axum::http::Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(axum::body::Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(axum::body::Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn create_body() -> Value {
    json!({
        "players": [
            {"name": "Alice", "handicap": 0},
            {"name": "Bob", "handicap": 0}
        ],
        "course": "Sunrise",
        "frontArea": "East",
        "backArea": "West",
        "bankStake": 100,
        "sideStake": 10
    })
}

async fn create_game(app: &axum::Router) -> String {
    let (status, body) = send(app, "POST", "/v1/games", Some(create_body())).await;
    assert_eq!(status, StatusCode::CREATED);
    body["gameId"].as_str().unwrap().to_string()
}

fn hole_body(alice: u32, bob: u32, confirmed: bool) -> Value {
    json!({
        "entries": {
            "Alice": {"strokes": alice, "events": []},
            "Bob": {"strokes": bob, "events": []}
        },
        "confirmed": confirmed
    })
}

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _temp) = setup_test_app().await;
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_ready_endpoint() {
    let (app, _temp) = setup_test_app().await;
    let (status, body) = send(&app, "GET", "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_players_endpoint() {
    let (app, _temp) = setup_test_app().await;
    let (status, body) = send(&app, "GET", "/v1/players", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["players"], json!(["Alice", "Bob"]));
}

#[tokio::test]
async fn test_courses_endpoint() {
    let (app, _temp) = setup_test_app().await;
    let (status, body) = send(&app, "GET", "/v1/courses", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["courses"]["Sunrise"], json!(["East", "West"]));
}

#[tokio::test]
async fn test_create_game_returns_id_and_share_url() {
    let (app, _temp) = setup_test_app().await;
    let (status, body) = send(&app, "POST", "/v1/games", Some(create_body())).await;

    assert_eq!(status, StatusCode::CREATED);
    let game_id = body["gameId"].as_str().unwrap();
    assert_eq!(game_id.len(), 9);
    assert!(game_id.ends_with("_01"));
    assert_eq!(
        body["shareUrl"],
        format!("http://viewer.test?mode=view&game_id={}", game_id)
    );
}

#[tokio::test]
async fn test_create_game_same_day_sequence() {
    let (app, _temp) = setup_test_app().await;
    let first = create_game(&app).await;
    let second = create_game(&app).await;

    assert!(first.ends_with("_01"));
    assert!(second.ends_with("_02"));
}

#[tokio::test]
async fn test_create_game_rejects_single_player() {
    let (app, _temp) = setup_test_app().await;
    let mut body = create_body();
    body["players"] = json!([{"name": "Alice", "handicap": 0}]);

    let (status, response) = send(&app, "POST", "/v1/games", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(response["error"].as_str().unwrap().contains("2 to 4"));
}

#[tokio::test]
async fn test_create_game_rejects_duplicate_players() {
    let (app, _temp) = setup_test_app().await;
    let mut body = create_body();
    body["players"] = json!([
        {"name": "Alice", "handicap": 0},
        {"name": "Alice", "handicap": 5}
    ]);

    let (status, _) = send(&app, "POST", "/v1/games", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_game_rejects_unknown_area() {
    let (app, _temp) = setup_test_app().await;
    let mut body = create_body();
    body["frontArea"] = json!("North");

    let (status, response) = send(&app, "POST", "/v1/games", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(response["error"].as_str().unwrap().contains("North"));
}

#[tokio::test]
async fn test_create_game_rejects_excessive_handicap() {
    let (app, _temp) = setup_test_app().await;
    let mut body = create_body();
    body["players"] = json!([
        {"name": "Alice", "handicap": 60},
        {"name": "Bob", "handicap": 0}
    ]);

    let (status, _) = send(&app, "POST", "/v1/games", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_missing_game_is_404() {
    let (app, _temp) = setup_test_app().await;
    let (status, _) = send(&app, "GET", "/v1/games/250101_99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_malformed_game_id_is_400() {
    let (app, _temp) = setup_test_app().await;
    let (status, _) = send(&app, "GET", "/v1/games/not-an-id", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_confirmed_hole_settles_and_pays_winner() {
    let (app, _temp) = setup_test_app().await;
    let game_id = create_game(&app).await;

    let uri = format!("/v1/games/{}/holes/1", game_id);
    let (status, body) = send(&app, "PUT", &uri, Some(hole_body(4, 5, true))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["holesSettled"], 1);
    assert_eq!(body["outcome"]["kind"]["kind"], "win");
    assert_eq!(body["outcome"]["kind"]["player"], "Alice");
    assert_eq!(body["points"]["Alice"], 1);
    assert_eq!(body["points"]["Bob"], 0);
    assert_eq!(body["bank"], 1);
}

#[tokio::test]
async fn test_staged_write_does_not_settle() {
    let (app, _temp) = setup_test_app().await;
    let game_id = create_game(&app).await;

    let uri = format!("/v1/games/{}/holes/1", game_id);
    let (status, body) = send(&app, "PUT", &uri, Some(hole_body(4, 5, false))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["holesSettled"], 0);
    assert!(body["outcome"].is_null());
}

#[tokio::test]
async fn test_confirmed_hole_cannot_be_rewritten() {
    let (app, _temp) = setup_test_app().await;
    let game_id = create_game(&app).await;

    let uri = format!("/v1/games/{}/holes/1", game_id);
    let (status, _) = send(&app, "PUT", &uri, Some(hole_body(4, 5, true))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "PUT", &uri, Some(hole_body(3, 5, true))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("confirmed"));
}

#[tokio::test]
async fn test_hole_zero_is_out_of_range() {
    let (app, _temp) = setup_test_app().await;
    let game_id = create_game(&app).await;

    let uri = format!("/v1/games/{}/holes/0", game_id);
    let (status, _) = send(&app, "PUT", &uri, Some(hole_body(4, 5, true))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_tie_carries_bank_into_next_hole() {
    let (app, _temp) = setup_test_app().await;
    let game_id = create_game(&app).await;

    let (_, body) = send(
        &app,
        "PUT",
        &format!("/v1/games/{}/holes/1", game_id),
        Some(hole_body(4, 4, true)),
    )
    .await;
    assert_eq!(body["outcome"]["kind"]["kind"], "tie");
    assert_eq!(body["bank"], 2);

    let (_, body) = send(
        &app,
        "PUT",
        &format!("/v1/games/{}/holes/2", game_id),
        Some(hole_body(4, 5, true)),
    )
    .await;
    assert_eq!(body["outcome"]["bankAward"], 2);
    assert_eq!(body["points"]["Alice"], 2);
    assert_eq!(body["bank"], 1);
}

#[tokio::test]
async fn test_game_view_replays_full_history() {
    let (app, _temp) = setup_test_app().await;
    let game_id = create_game(&app).await;

    send(
        &app,
        "PUT",
        &format!("/v1/games/{}/holes/1", game_id),
        Some(hole_body(4, 5, true)),
    )
    .await;
    send(
        &app,
        "PUT",
        &format!("/v1/games/{}/holes/2", game_id),
        Some(hole_body(6, 4, true)),
    )
    .await;

    let (status, body) = send(&app, "GET", &format!("/v1/games/{}", game_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["derived"]["holesSettled"], 2);
    assert_eq!(body["derived"]["points"]["Alice"], 1);
    assert_eq!(body["derived"]["points"]["Bob"], 1);
    assert_eq!(body["derived"]["outcomes"].as_array().unwrap().len(), 2);
    assert_eq!(
        body["shareUrl"],
        format!("http://viewer.test?mode=view&game_id={}", game_id)
    );
}

#[tokio::test]
async fn test_summary_cash_is_zero_sum() {
    let (app, _temp) = setup_test_app().await;
    let game_id = create_game(&app).await;

    for (hole, alice, bob) in [(1, 4, 5), (2, 4, 4), (3, 3, 5), (4, 5, 4)] {
        let (status, _) = send(
            &app,
            "PUT",
            &format!("/v1/games/{}/holes/{}", game_id, hole),
            Some(hole_body(alice, bob, true)),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = send(
        &app,
        "GET",
        &format!("/v1/games/{}/summary", game_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["completedHoles"], 4);

    let rows = body["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    let bank_total: i64 = rows.iter().map(|r| r["bankNet"].as_i64().unwrap()).sum();
    let side_total: i64 = rows.iter().map(|r| r["sideNet"].as_i64().unwrap()).sum();
    assert_eq!(bank_total, 0);
    assert_eq!(side_total, 0);

    // Rows are sorted by total net, best first.
    let nets: Vec<i64> = rows.iter().map(|r| r["totalNet"].as_i64().unwrap()).collect();
    let mut sorted = nets.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(nets, sorted);
}
