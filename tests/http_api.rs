//! HTTP surface tests against the in-memory store.

use std::sync::Arc;

use actix_web::{http::StatusCode, test, web, App};
use foosball_server::http;
use foosball_server::league::service::LeagueService;
use foosball_server::league::Player;
use foosball_server::store::MemoryStore;
use serde_json::{json, Value};

fn league_data(players: Vec<Player>) -> web::Data<LeagueService> {
    web::Data::new(LeagueService::new(Arc::new(MemoryStore::with_players(
        players,
    ))))
}

#[actix_web::test]
async fn submit_match_returns_notification_and_table() {
    let svc = league_data(vec![Player::new("alice"), Player::new("bob")]);
    let app = test::init_service(
        App::new()
            .app_data(svc.clone())
            .configure(http::routes::init_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/matches")
        .set_json(json!({
            "player_a": "alice",
            "player_b": "bob",
            "score_a": 10,
            "score_b": 5
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert!(body["notification"].as_str().unwrap().contains("alice"));
    assert_eq!(body["leaderboard"][0]["name"], "alice");
    assert_eq!(body["leaderboard"][0]["rating"], 816);
    assert_eq!(body["leaderboard"][0]["medal"], "gold");
    assert_eq!(body["leaderboard"][1]["rating"], 784);
}

#[actix_web::test]
async fn invalid_scores_get_a_bad_request() {
    let svc = league_data(vec![Player::new("alice"), Player::new("bob")]);
    let app = test::init_service(
        App::new()
            .app_data(svc.clone())
            .configure(http::routes::init_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/matches")
        .set_json(json!({
            "player_a": "alice",
            "player_b": "bob",
            "score_a": 10,
            "score_b": 10
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("exactly one"));
}

#[actix_web::test]
async fn unknown_player_is_a_not_found() {
    let svc = league_data(vec![Player::new("alice"), Player::new("bob")]);
    let app = test::init_service(
        App::new()
            .app_data(svc.clone())
            .configure(http::routes::init_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/matches")
        .set_json(json!({
            "player_a": "alice",
            "player_b": "ghost",
            "score_a": 10,
            "score_b": 5
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn duplicate_player_registration_is_rejected() {
    let svc = league_data(vec![Player::new("Alex")]);
    let app = test::init_service(
        App::new()
            .app_data(svc.clone())
            .configure(http::routes::init_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/players")
        .set_json(json!({ "name": "Alex" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Table unchanged.
    let req = test::TestRequest::get().uri("/api/players").to_request();
    let players: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(players.as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn leaderboard_lists_players_by_rating() {
    let mut carol = Player::new("carol");
    carol.rating = 850;
    let svc = league_data(vec![Player::new("alice"), carol]);
    let app = test::init_service(
        App::new()
            .app_data(svc.clone())
            .configure(http::routes::init_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/leaderboard").to_request();
    let rows: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(rows[0]["name"], "carol");
    assert_eq!(rows[0]["rank"], 1);
    assert_eq!(rows[1]["name"], "alice");
}

#[actix_web::test]
async fn healthz_reports_ok() {
    let svc = league_data(vec![]);
    let app = test::init_service(
        App::new()
            .app_data(svc.clone())
            .configure(http::routes::init_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/healthz").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
