use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, ListEnvelope, Species};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder()
        .uri(uri)
        .header(http::header::HOST, "dex.test")
        .body(String::new())
        .unwrap()
}

// --- list ---

#[tokio::test]
async fn list_defaults_to_first_twenty() {
    let resp = app().oneshot(get("/pokemon")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: ListEnvelope = body_json(resp).await;
    assert_eq!(page.count, 45);
    assert_eq!(page.results.len(), 20);
    assert_eq!(page.results[0].name, "bulbasaur");
    assert_eq!(page.results[0].url, "http://dex.test/pokemon/1/");
    assert!(page.previous.is_none());
    assert_eq!(
        page.next.as_deref(),
        Some("http://dex.test/pokemon?offset=20&limit=20")
    );
}

#[tokio::test]
async fn list_last_page_is_short_and_has_no_next() {
    let resp = app()
        .oneshot(get("/pokemon?offset=40&limit=20"))
        .await
        .unwrap();

    let page: ListEnvelope = body_json(resp).await;
    assert_eq!(page.results.len(), 5);
    assert_eq!(page.results[4].name, "vileplume");
    assert!(page.next.is_none());
    assert_eq!(
        page.previous.as_deref(),
        Some("http://dex.test/pokemon?offset=20&limit=20")
    );
}

#[tokio::test]
async fn list_past_the_end_is_empty() {
    let resp = app()
        .oneshot(get("/pokemon?offset=100&limit=20"))
        .await
        .unwrap();

    let page: ListEnvelope = body_json(resp).await;
    assert_eq!(page.count, 45);
    assert!(page.results.is_empty());
}

#[tokio::test]
async fn list_bad_offset_returns_400() {
    let resp = app()
        .oneshot(get("/pokemon?offset=-1"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- detail ---

#[tokio::test]
async fn get_by_name() {
    let resp = app().oneshot(get("/pokemon/pikachu")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json: serde_json::Value = body_json(resp).await;
    assert_eq!(json["id"], 25);
    assert_eq!(json["weight"], 60);
}

#[tokio::test]
async fn get_by_id() {
    let resp = app().oneshot(get("/pokemon/6")).await.unwrap();

    let json: serde_json::Value = body_json(resp).await;
    assert_eq!(json["name"], "charizard");
    assert_eq!(json["types"][1]["type"]["name"], "flying");
}

#[tokio::test]
async fn get_is_case_sensitive() {
    let resp = app().oneshot(get("/pokemon/Pikachu")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(resp).await.is_empty());
}

#[tokio::test]
async fn get_unknown_returns_404() {
    let resp = app().oneshot(get("/pokemon/missingno")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn custom_pokedex() {
    let only = Species {
        id: 151,
        name: "mew".to_string(),
        height: 4,
        weight: 40,
        types: vec!["psychic".to_string()],
        sprite: None,
    };
    let resp = app_with(vec![only]).oneshot(get("/pokemon/151")).await.unwrap();

    let json: serde_json::Value = body_json(resp).await;
    assert_eq!(json["name"], "mew");
    assert!(json["sprites"]["front_default"].is_null());
}
