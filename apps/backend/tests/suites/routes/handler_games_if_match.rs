// ETag preconditions on the game endpoints.
//
// Tests include:
// - If-None-Match with the current ETag yields 304 without a body
// - If-Match with the current ETag succeeds and bumps the version
// - If-Match with a stale ETag yields 409 OPTIMISTIC_LOCK (plays, PUT, DELETE)
// - If-Match: * and a missing If-Match pin nothing
// - Malformed If-Match yields 400 INVALID_HEADER

use actix_web::http::header::{ETAG, IF_MATCH, IF_NONE_MATCH};
use actix_web::http::StatusCode;
use actix_web::test;
use scorebook::http::etag::game_etag;
use scorebook::state::app_state::AppState;
use scorebook_test_support::assert_problem_details;

use crate::common::{etag_of, read_json};
use crate::support::create_test_app;
use crate::support::factory::{new_game_body, play_body, unique_game_id};

async fn created_game<S>(app: &S, name: &str) -> String
where
    S: actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse<actix_web::body::BoxBody>,
        Error = actix_web::Error,
    >,
{
    let id = unique_game_id(name);
    let req = test::TestRequest::post()
        .uri("/api/game")
        .set_json(new_game_body(&id, 9, None))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    id
}

#[actix_web::test]
async fn if_none_match_current_etag_is_304() {
    let app = create_test_app(AppState::for_tests()).build().await;
    let id = created_game(&app, "inm").await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/game/{id}"))
        .insert_header((IF_NONE_MATCH, game_etag(&id, 1)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_MODIFIED);
    assert_eq!(etag_of(&resp), game_etag(&id, 1));
    assert!(test::read_body(resp).await.is_empty());

    // Once the game moves on, the old tag no longer matches.
    let req = test::TestRequest::post()
        .uri(&format!("/api/game/{id}/plays"))
        .set_json(play_body("walk"))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/game/{id}"))
        .insert_header((IF_NONE_MATCH, game_etag(&id, 1)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(etag_of(&resp), game_etag(&id, 2));
}

#[actix_web::test]
async fn matching_if_match_succeeds_and_bumps_etag() {
    let app = create_test_app(AppState::for_tests()).build().await;
    let id = created_game(&app, "im-ok").await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/game/{id}/plays"))
        .insert_header((IF_MATCH, game_etag(&id, 1)))
        .set_json(play_body("double"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(ETAG).unwrap().to_str().unwrap(),
        game_etag(&id, 2)
    );
}

#[actix_web::test]
async fn stale_if_match_on_play_is_conflict_and_leaves_game_untouched() {
    let app = create_test_app(AppState::for_tests()).build().await;
    let id = created_game(&app, "im-stale").await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/game/{id}/plays"))
        .set_json(play_body("single"))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/game/{id}/plays"))
        .insert_header((IF_MATCH, game_etag(&id, 1)))
        .set_json(play_body("homerun"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, "OPTIMISTIC_LOCK", StatusCode::CONFLICT, None).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/game/{id}"))
        .to_request();
    let body = read_json(test::call_service(&app, req).await).await;
    assert_eq!(body["version"], 2);
    assert_eq!(body["game"]["score"]["away"], 0);
}

#[actix_web::test]
async fn stale_if_match_on_put_and_delete_is_conflict() {
    let app = create_test_app(AppState::for_tests()).build().await;
    let id = created_game(&app, "im-put").await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/game/{id}"))
        .to_request();
    let game = read_json(test::call_service(&app, req).await).await["game"].clone();

    let req = test::TestRequest::put()
        .uri(&format!("/api/game/{id}"))
        .insert_header((IF_MATCH, game_etag(&id, 1)))
        .set_json(&game)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::put()
        .uri(&format!("/api/game/{id}"))
        .insert_header((IF_MATCH, game_etag(&id, 1)))
        .set_json(&game)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, "OPTIMISTIC_LOCK", StatusCode::CONFLICT, None).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/game/{id}"))
        .insert_header((IF_MATCH, game_etag(&id, 1)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, "OPTIMISTIC_LOCK", StatusCode::CONFLICT, None).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/game/{id}"))
        .insert_header((IF_MATCH, game_etag(&id, 2)))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NO_CONTENT
    );
}

#[actix_web::test]
async fn wildcard_if_match_pins_nothing() {
    let app = create_test_app(AppState::for_tests()).build().await;
    let id = created_game(&app, "im-star").await;

    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri(&format!("/api/game/{id}/plays"))
            .insert_header((IF_MATCH, "*"))
            .set_json(play_body("walk"))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }
}

#[actix_web::test]
async fn malformed_if_match_is_400() {
    let app = create_test_app(AppState::for_tests()).build().await;
    let id = created_game(&app, "im-bad").await;

    for header in ["\"game-other-v1\"".to_string(), format!("\"game-{id}-vX\"")] {
        let req = test::TestRequest::post()
            .uri(&format!("/api/game/{id}/plays"))
            .insert_header((IF_MATCH, header))
            .set_json(play_body("walk"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem_details(resp, "INVALID_HEADER", StatusCode::BAD_REQUEST, None).await;
    }
}
