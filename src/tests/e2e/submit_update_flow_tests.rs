// End to end test for the update flow, wired through the real router:
// submit a few updates, read them back, clear everything.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::progress::adapters::outbound::progress_store_in_memory::InMemoryProgressStore;
use crate::modules::progress::use_cases::submit_update::handler::SubmitUpdateHandler;
use crate::shell::http::router;
use crate::shell::state::AppState;

fn make_app() -> Router {
    let store = Arc::new(InMemoryProgressStore::new());
    let submit_handler = Arc::new(SubmitUpdateHandler::new(store.clone()));
    router(AppState {
        submit_handler,
        store,
    })
}

async fn request_json(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

fn post(body: &str) -> Request<Body> {
    Request::post("/api/updates")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn it_should_answer_the_health_check() {
    let response = make_app()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"Server OK");
}

#[tokio::test]
async fn it_should_merge_same_day_submits_and_append_new_days() {
    let app = make_app();

    let (status, json) = request_json(
        app.clone(),
        post(r#"{"date":"2024-01-01","name":"Ann","email":" Ann@X.com ","module":"intro"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["mode"], "new_day_row");

    let (status, json) = request_json(
        app.clone(),
        post(r#"{"date":"2024-01-01","name":"Ann","email":"ann@x.com","module":"basics"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["mode"], "same_day_append");

    let (status, json) = request_json(
        app.clone(),
        post(r#"{"date":"2024-01-02","name":"Ann","email":"ANN@x.com","module":"forms","needGuidelines":true}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["mode"], "new_day_row");

    let (status, json) = request_json(
        app.clone(),
        Request::get("/api/updates").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 1);
    let user = &json[0];
    assert_eq!(user["email"], "ann@x.com");
    assert_eq!(user["lastModule"], "forms");
    assert_eq!(user["lastDate"], "2024-01-02");
    assert_eq!(user["lastNeedGuidelines"], true);
    let history = user["history"].as_array().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["date"], "2024-01-01");
    assert_eq!(history[0]["module"], "basics");
    assert_eq!(history[0]["modules"], serde_json::json!(["intro", "basics"]));
    assert_eq!(history[1]["date"], "2024-01-02");
    assert_eq!(history[1]["modules"], serde_json::json!(["forms"]));
}

#[tokio::test]
async fn it_should_clear_everything_and_list_nothing_afterwards() {
    let app = make_app();

    request_json(
        app.clone(),
        post(r#"{"date":"2024-01-01","name":"Ann","email":"ann@x.com","module":"intro"}"#),
    )
    .await;
    request_json(
        app.clone(),
        post(r#"{"date":"2024-01-01","name":"Bob","email":"bob@x.com","module":"intro"}"#),
    )
    .await;

    let (status, json) = request_json(
        app.clone(),
        Request::delete("/api/updates").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["ok"], true);
    assert_eq!(json["deletedCount"], 2);

    let (status, json) = request_json(
        app.clone(),
        Request::get("/api/updates").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!([]));
}
