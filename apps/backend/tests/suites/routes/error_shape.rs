// Problem Details contract: every error carries type/title/status/detail,
// an `error` mirror of `detail`, a stable code, and a trace id matching
// the x-trace-id and x-request-id headers.

use actix_web::http::StatusCode;
use actix_web::test;
use scorebook::state::app_state::AppState;

use crate::common::read_json;
use crate::support::create_test_app;

#[actix_web::test]
async fn not_found_body_has_every_field() {
    let app = create_test_app(AppState::for_tests()).build().await;

    let req = test::TestRequest::get()
        .uri("/api/game/game-missing")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let trace_header = resp
        .headers()
        .get("x-trace-id")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    let request_id = resp
        .headers()
        .get("x-request-id")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert_ne!(trace_header, "unknown");
    assert_eq!(trace_header, request_id);

    let body = read_json(resp).await;
    assert_eq!(body["type"], "https://scorebook.dev/errors/GAME_NOT_FOUND");
    assert_eq!(body["title"], "Game Not Found");
    assert_eq!(body["status"], 404);
    assert_eq!(body["code"], "GAME_NOT_FOUND");
    assert_eq!(body["detail"], "Game game-missing not found");
    assert_eq!(body["error"], body["detail"]);
    assert_eq!(body["trace_id"], trace_header.as_str());
}

#[actix_web::test]
async fn invalid_json_is_bad_request() {
    let app = create_test_app(AppState::for_tests()).build().await;

    let req = test::TestRequest::post()
        .uri("/api/game")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = read_json(resp).await;
    assert_eq!(body["code"], "BAD_REQUEST");
    assert!(body["detail"].as_str().unwrap().starts_with("Invalid JSON"));
}
