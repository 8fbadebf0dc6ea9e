use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use starwars_favorites::models::{NewCharacter, NewPlanet, NewUser};
use starwars_favorites::{app, connect_pool, ensure_tables, AppState, CatalogService};
use tower::ServiceExt;

async fn test_app() -> Router {
    let pool = connect_pool("sqlite::memory:", 1).await.unwrap();
    ensure_tables(&pool).await.unwrap();

    for (id, email, active) in [
        (1, "luke@rebellion.org", true),
        (2, "leia@rebellion.org", true),
        (3, "anakin@jedi.org", false),
    ] {
        CatalogService::insert_user(
            &pool,
            &NewUser {
                id: Some(id),
                email: email.into(),
                password: "not-serialized".into(),
                is_active: active,
            },
        )
        .await
        .unwrap();
    }
    CatalogService::insert_character(
        &pool,
        &NewCharacter {
            id: Some(1),
            name: "Luke Skywalker".into(),
            homeworld: Some("Tatooine".into()),
            url: "https://swapi.dev/api/people/1/".into(),
        },
    )
    .await
    .unwrap();
    CatalogService::insert_planet(
        &pool,
        &NewPlanet {
            id: Some(1),
            name: "Tatooine".into(),
            population: Some("200000".into()),
            climate: Some("arid".into()),
            terrain: Some("desert".into()),
            url: Some("https://swapi.dev/api/planets/1/".into()),
        },
    )
    .await
    .unwrap();

    app(AppState::new(pool))
}

async fn send(app: &Router, method: Method, uri: &str, user: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(id) = user {
        builder = builder.header("X-User-Id", id);
    }
    let response = app
        .clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[tokio::test]
async fn lists_users_without_passwords() {
    let app = test_app().await;
    let (status, body) = send(&app, Method::GET, "/user", None).await;
    assert_eq!(status, StatusCode::OK);
    let users = body["users"].as_array().unwrap();
    assert_eq!(users.len(), 3);
    assert_eq!(users[0], json!({ "id": 1, "email": "luke@rebellion.org", "is_active": true }));
}

#[tokio::test]
async fn character_lookup_returns_record_or_404() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/characters", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, body) = send(&app, Method::GET, "/characters/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": 1,
            "name": "Luke Skywalker",
            "homeworld": "Tatooine",
            "url": "https://swapi.dev/api/people/1/"
        })
    );

    let (status, body) = send(&app, Method::GET, "/characters/404", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status_code"], 404);
    assert!(body["message"].as_str().unwrap().contains("character 404"));

    let (status, body) = send(&app, Method::GET, "/characters/luke", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status_code"], 400);
}

#[tokio::test]
async fn planet_lookup_returns_record_or_404() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/planet", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["name"], "Tatooine");

    let (status, body) = send(&app, Method::GET, "/planet/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["climate"], "arid");

    let (status, _) = send(&app, Method::GET, "/planet/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn add_favorite_then_list_contains_it_once() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::POST, "/favorite/character/1", Some("1")).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Favorite character added");
    assert_eq!(body["favorite"]["item_type"], "character");

    let (status, _) = send(&app, Method::POST, "/favorite/character/1", Some("1")).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = send(&app, Method::GET, "/users/favorites", Some("1")).await;
    assert_eq!(status, StatusCode::OK);
    let favorites = body.as_array().unwrap();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0]["user_id"], 1);
    assert_eq!(favorites[0]["item_id"], 1);
}

#[tokio::test]
async fn favorites_are_scoped_to_the_acting_user() {
    let app = test_app().await;
    send(&app, Method::POST, "/favorite/planet/1", Some("1")).await;

    let (status, body) = send(&app, Method::GET, "/users/favorites", Some("2")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, _) = send(&app, Method::DELETE, "/favorite/planet/1", Some("2")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_favorite_removes_once_then_404() {
    let app = test_app().await;
    send(&app, Method::POST, "/favorite/planet/1", Some("1")).await;

    let (status, body) = send(&app, Method::DELETE, "/favorite/planet/1", Some("1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Favorite planet deleted successfully");

    let (status, body) = send(&app, Method::DELETE, "/favorite/planet/1", Some("1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status_code"], 404);

    let (_, body) = send(&app, Method::GET, "/users/favorites", Some("1")).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn favorite_of_missing_item_is_404() {
    let app = test_app().await;
    let (status, _) = send(&app, Method::POST, "/favorite/character/77", Some("1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_item_type_is_rejected() {
    let app = test_app().await;
    let (status, body) = send(&app, Method::POST, "/favorite/starship/1", Some("1")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("starship"));

    let (status, _) = send(&app, Method::DELETE, "/favorite/vehicle/1", Some("1")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn favorites_require_a_known_active_user() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/users/favorites", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["status_code"], 401);

    let (status, _) = send(&app, Method::POST, "/favorite/character/1", Some("42")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, Method::POST, "/favorite/character/1", Some("3")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn common_routes_report_health() {
    let app = test_app().await;
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = send(&app, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["tables"], 4);

    let (_, body) = send(&app, Method::GET, "/version", None).await;
    assert_eq!(body["name"], "starwars-favorites");
}

#[tokio::test]
async fn unknown_route_uses_error_body() {
    let app = test_app().await;
    let (status, body) = send(&app, Method::GET, "/starships", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status_code"], 404);
}

#[tokio::test]
async fn wrong_method_uses_error_body() {
    let app = test_app().await;
    let (status, body) = send(&app, Method::PUT, "/user", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["status_code"], 405);

    let (status, body) = send(&app, Method::GET, "/favorite/planet/1", Some("1")).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["status_code"], 405);
}

#[tokio::test]
async fn oversized_body_uses_error_body() {
    let app = test_app().await;
    let payload = vec![b'x'; 128 * 1024];
    let request = Request::builder()
        .method(Method::POST)
        .uri("/favorite/planet/1")
        .header("X-User-Id", "1")
        .header("content-length", payload.len())
        .body(Body::from(payload))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status_code"], 413);
}
