#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

use marcenaria::config::AppState;
use marcenaria::router::build_router;

// Custo mínimo do bcrypt: os testes não precisam de hash lento
const TEST_BCRYPT_COST: u32 = 4;

/// Router completo (mesmas camadas do binário) sobre o banco de teste.
///
/// O pool vem do `#[sqlx::test]`: um banco novo por teste, com as migrações aplicadas.
pub fn build_test_app(pool: PgPool) -> Router {
    let state = AppState::new(pool, "segredo-de-teste".into(), TEST_BCRYPT_COST);
    build_router(state, &["http://localhost:5173".to_string()]).expect("router de teste")
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    TestResponse { status, body }
}

pub async fn get(app: &Router, uri: &str, token: &str) -> TestResponse {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post(app: &Router, uri: &str, token: &str, body: Value) -> TestResponse {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put(app: &Router, uri: &str, token: &str, body: Value) -> TestResponse {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete(app: &Router, uri: &str, token: &str) -> TestResponse {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Registra um usuário e devolve o token.
pub async fn register(app: &Router, email: &str) -> String {
    let res = send(
        app,
        Method::POST,
        "/api/auth/register",
        None,
        Some(json!({ "email": email, "password": "segredo123" })),
    )
    .await;
    assert_eq!(res.status, StatusCode::CREATED, "registro falhou: {}", res.body);
    res.body["token"].as_str().unwrap().to_string()
}

pub async fn create_client(app: &Router, token: &str, name: &str) -> String {
    let res = post(app, "/api/clients", token, json!({ "name": name })).await;
    assert_eq!(res.status, StatusCode::CREATED, "{}", res.body);
    res.body["id"].as_str().unwrap().to_string()
}

pub async fn create_project(app: &Router, token: &str, client_id: &str, name: &str) -> String {
    let res = post(app, "/api/projects", token, json!({ "name": name, "clientId": client_id })).await;
    assert_eq!(res.status, StatusCode::CREATED, "{}", res.body);
    res.body["id"].as_str().unwrap().to_string()
}

pub async fn create_environment(app: &Router, token: &str, project_id: &str, name: &str) -> String {
    let res = post(
        app,
        &format!("/api/projects/{}/environments", project_id),
        token,
        json!({ "name": name, "type": "cozinha" }),
    )
    .await;
    assert_eq!(res.status, StatusCode::CREATED, "{}", res.body);
    res.body["id"].as_str().unwrap().to_string()
}

/// Usuário + cliente + projeto + ambiente, pronto para briefing e medições.
pub async fn seeded_environment(app: &Router) -> (String, String, String) {
    let token = register(app, "marceneiro@oficina.com").await;
    let client_id = create_client(app, &token, "Ana").await;
    let project_id = create_project(app, &token, &client_id, "Cozinha Ana").await;
    let env_id = create_environment(app, &token, &project_id, "Cozinha").await;
    (token, project_id, env_id)
}
