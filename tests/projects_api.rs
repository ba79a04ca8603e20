//! Projetos e briefing (ambientes e módulos).

mod common;

use axum::http::{header, Method, Request, StatusCode};
use axum::body::Body;
use common::{
    build_test_app, create_client, create_environment, create_project, delete, get, post, put,
    register, seeded_environment,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "./migrations")]
async fn projects_get_sequential_codes_and_newest_first(pool: PgPool) {
    let app = build_test_app(pool);
    let token = register(&app, "ana@oficina.com").await;
    let client_id = create_client(&app, &token, "Ana").await;

    for name in ["Cozinha", "Quarto", "Banheiro"] {
        create_project(&app, &token, &client_id, name).await;
    }

    let res = get(&app, "/api/projects", &token).await;
    let rows = res.body.as_array().unwrap();
    let names: Vec<&str> = rows.iter().map(|p| p["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Banheiro", "Quarto", "Cozinha"]);
    assert_eq!(rows[0]["code"], "PRJ-0003");
    assert_eq!(rows[2]["code"], "PRJ-0001");
    assert_eq!(rows[0]["status"], "draft");
    assert_eq!(rows[0]["statusLabel"], "Rascunho");
    assert_eq!(rows[0]["clientName"], "Ana");
}

#[sqlx::test(migrations = "./migrations")]
async fn status_label_and_color_come_from_the_table(pool: PgPool) {
    let app = build_test_app(pool);
    let token = register(&app, "ana@oficina.com").await;
    let client_id = create_client(&app, &token, "Ana").await;

    let res = post(
        &app,
        "/api/projects",
        &token,
        json!({ "name": "Closet", "clientId": client_id, "status": "awaiting_quote" }),
    )
    .await;
    assert_eq!(res.status, StatusCode::CREATED);
    assert_eq!(res.body["statusLabel"], "Aguardando Orçamento");
    assert_eq!(res.body["statusColor"], "orange");
}

#[sqlx::test(migrations = "./migrations")]
async fn measurements_need_an_environment(pool: PgPool) {
    let app = build_test_app(pool);
    let token = register(&app, "ana@oficina.com").await;
    let client_id = create_client(&app, &token, "Ana").await;
    let project_id = create_project(&app, &token, &client_id, "Sala").await;

    let uri = format!("/api/projects/{}/measurements/start", project_id);
    let res = post(&app, &uri, &token, json!({})).await;
    assert_eq!(res.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(res.body["error"], "Adicione pelo menos um ambiente antes de continuar");

    create_environment(&app, &token, &project_id, "Sala").await;
    let res = post(&app, &uri, &token, json!({})).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["status"], "measuring");
}

#[sqlx::test(migrations = "./migrations")]
async fn report_is_not_implemented_yet(pool: PgPool) {
    let app = build_test_app(pool);
    let token = register(&app, "ana@oficina.com").await;
    let client_id = create_client(&app, &token, "Ana").await;
    let project_id = create_project(&app, &token, &client_id, "Sala").await;

    let res = get(&app, &format!("/api/projects/{}/report", project_id), &token).await;
    assert_eq!(res.status, StatusCode::NOT_IMPLEMENTED);
    assert_eq!(res.body["error"], "Funcionalidade de PDF em desenvolvimento");
}

#[sqlx::test(migrations = "./migrations")]
async fn errors_follow_accept_language(pool: PgPool) {
    let app = build_test_app(pool);
    let token = register(&app, "ana@oficina.com").await;

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/projects/6f1c1f5e-1d2b-4a7a-9a55-0b7c9a1b2c3d")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .header(header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "Project not found.");
}

#[sqlx::test(migrations = "./migrations")]
async fn duplicate_module_rejected_on_create_only(pool: PgPool) {
    let app = build_test_app(pool);
    let (token, _, env_id) = seeded_environment(&app).await;
    let uri = format!("/api/environments/{}/modules", env_id);

    let res = post(&app, &uri, &token, json!({ "name": "Balcões", "hasDoors": true, "doorCount": 4 })).await;
    assert_eq!(res.status, StatusCode::CREATED, "{}", res.body);

    let res = post(&app, &uri, &token, json!({ "name": "BALCÕES" })).await;
    assert_eq!(res.status, StatusCode::CONFLICT);
    assert_eq!(res.body["error"], "Este módulo já existe neste ambiente");

    let other = post(&app, &uri, &token, json!({ "name": "Ilha" })).await;
    assert_eq!(other.status, StatusCode::CREATED);
    let other_id = other.body["id"].as_str().unwrap();

    // Editar para um nome que colide é aceito
    let res = put(&app, &format!("/api/modules/{}", other_id), &token, json!({ "name": "Balcões" })).await;
    assert_eq!(res.status, StatusCode::OK, "{}", res.body);
    assert_eq!(res.body["name"], "Balcões");

    let res = get(&app, &uri, &token).await;
    assert_eq!(res.body.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn module_hardware_round_trips(pool: PgPool) {
    let app = build_test_app(pool);
    let (token, _, env_id) = seeded_environment(&app).await;

    let res = post(
        &app,
        &format!("/api/environments/{}/modules", env_id),
        &token,
        json!({
            "name": "Aéreo",
            "doorType": "provencal",
            "countertopType": "granito",
            "hardware": { "dobradica": true, "amortecida": true, "puxadores": "Cava" }
        }),
    )
    .await;
    assert_eq!(res.status, StatusCode::CREATED);
    assert_eq!(res.body["hardware"]["amortecida"], true);
    assert_eq!(res.body["hardware"]["cantoneiras"], false);
    assert_eq!(res.body["doorType"], "provencal");
}

#[sqlx::test(migrations = "./migrations")]
async fn environment_delete_cascades(pool: PgPool) {
    let app = build_test_app(pool);
    let (token, project_id, env_id) = seeded_environment(&app).await;

    post(&app, &format!("/api/environments/{}/modules", env_id), &token, json!({ "name": "Balcões" })).await;
    let wall = post(&app, &format!("/api/environments/{}/walls", env_id), &token, json!({})).await;
    let wall_id = wall.body["id"].as_str().unwrap().to_string();

    let res = delete(&app, &format!("/api/environments/{}", env_id), &token).await;
    assert_eq!(res.status, StatusCode::PRECONDITION_REQUIRED);
    assert_eq!(get(&app, &format!("/api/walls/{}", wall_id), &token).await.status, StatusCode::OK);

    let res = delete(&app, &format!("/api/environments/{}?confirm=true", env_id), &token).await;
    assert_eq!(res.status, StatusCode::NO_CONTENT);

    assert_eq!(get(&app, &format!("/api/walls/{}", wall_id), &token).await.status, StatusCode::NOT_FOUND);
    let envs = get(&app, &format!("/api/projects/{}/environments", project_id), &token).await;
    assert!(envs.body.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn module_delete_needs_confirmation(pool: PgPool) {
    let app = build_test_app(pool);
    let (token, _, env_id) = seeded_environment(&app).await;
    let uri = format!("/api/environments/{}/modules", env_id);

    let created = post(&app, &uri, &token, json!({ "name": "Balcões" })).await;
    let id = created.body["id"].as_str().unwrap().to_string();

    let res = delete(&app, &format!("/api/modules/{}", id), &token).await;
    assert_eq!(res.status, StatusCode::PRECONDITION_REQUIRED);
    assert_eq!(get(&app, &uri, &token).await.body.as_array().unwrap().len(), 1);

    let res = delete(&app, &format!("/api/modules/{}?confirm=true", id), &token).await;
    assert_eq!(res.status, StatusCode::NO_CONTENT);
    assert!(get(&app, &uri, &token).await.body.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn environment_for_missing_project_is_not_found(pool: PgPool) {
    let app = build_test_app(pool);
    let token = register(&app, "ana@oficina.com").await;

    let res = send_env(&app, &token).await;
    assert_eq!(res, StatusCode::NOT_FOUND);
}

async fn send_env(app: &axum::Router, token: &str) -> StatusCode {
    post(
        app,
        "/api/projects/6f1c1f5e-1d2b-4a7a-9a55-0b7c9a1b2c3d/environments",
        token,
        json!({ "name": "Cozinha" }),
    )
    .await
    .status
}
