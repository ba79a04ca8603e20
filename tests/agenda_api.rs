//! Clientes e agenda.

mod common;

use axum::http::StatusCode;
use common::{build_test_app, create_client, delete, get, post, put, register};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "./migrations")]
async fn clients_are_listed_by_name(pool: PgPool) {
    let app = build_test_app(pool);
    let token = register(&app, "ana@oficina.com").await;
    for name in ["Marta", "Bruno", "Carla"] {
        create_client(&app, &token, name).await;
    }

    let res = get(&app, "/api/clients", &token).await;
    let names: Vec<&str> = res.body.as_array().unwrap().iter().map(|c| c["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Bruno", "Carla", "Marta"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn blank_client_name_is_rejected_before_writing(pool: PgPool) {
    let app = build_test_app(pool);
    let token = register(&app, "ana@oficina.com").await;

    let res = post(&app, "/api/clients", &token, json!({ "name": "   " })).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["error"], "Um ou mais campos são inválidos.");

    let res = get(&app, "/api/clients", &token).await;
    assert!(res.body.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn new_client_path_creates_client_then_appointment(pool: PgPool) {
    let app = build_test_app(pool);
    let token = register(&app, "ana@oficina.com").await;

    let res = post(
        &app,
        "/api/appointments",
        &token,
        json!({
            "client": { "kind": "new", "name": "João", "phone": "(11) 98888-7777" },
            "environmentType": "Cozinha",
            "scheduledDate": "2025-03-10",
            "scheduledTime": "14:30"
        }),
    )
    .await;
    assert_eq!(res.status, StatusCode::CREATED, "{}", res.body);
    assert_eq!(res.body["clientName"], "João");
    assert_eq!(res.body["status"], "pending");

    let clients = get(&app, "/api/clients", &token).await;
    let clients = clients.body.as_array().unwrap();
    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0]["name"], "João");

    let agenda = get(&app, "/api/appointments", &token).await;
    let agenda = agenda.body.as_array().unwrap();
    assert_eq!(agenda.len(), 1);
    assert_eq!(agenda[0]["clientId"], clients[0]["id"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn invalid_new_client_writes_nothing(pool: PgPool) {
    let app = build_test_app(pool);
    let token = register(&app, "ana@oficina.com").await;

    let res = post(
        &app,
        "/api/appointments",
        &token,
        json!({
            "client": { "kind": "new", "name": "" },
            "scheduledDate": "2025-03-10",
            "scheduledTime": "14:30"
        }),
    )
    .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);

    assert!(get(&app, "/api/clients", &token).await.body.as_array().unwrap().is_empty());
    assert!(get(&app, "/api/appointments", &token).await.body.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn unknown_existing_client_is_rejected(pool: PgPool) {
    let app = build_test_app(pool);
    let token = register(&app, "ana@oficina.com").await;

    let res = post(
        &app,
        "/api/appointments",
        &token,
        json!({
            "client": { "kind": "existing", "clientId": "6f1c1f5e-1d2b-4a7a-9a55-0b7c9a1b2c3d" },
            "scheduledDate": "2025-03-10",
            "scheduledTime": "14:30"
        }),
    )
    .await;
    assert_eq!(res.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "./migrations")]
async fn appointments_come_back_by_date(pool: PgPool) {
    let app = build_test_app(pool);
    let token = register(&app, "ana@oficina.com").await;
    let client_id = create_client(&app, &token, "Ana").await;

    for (date, time) in [("2025-05-01", "09:00"), ("2025-03-10", "14:30"), ("2025-03-10", "08:00")] {
        let res = post(
            &app,
            "/api/appointments",
            &token,
            json!({
                "client": { "kind": "existing", "clientId": client_id },
                "scheduledDate": date,
                "scheduledTime": time
            }),
        )
        .await;
        assert_eq!(res.status, StatusCode::CREATED, "{}", res.body);
    }

    let res = get(&app, "/api/appointments", &token).await;
    let dates: Vec<&str> = res
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["scheduledDate"].as_str().unwrap())
        .collect();
    assert_eq!(dates, vec!["2025-03-10T08:00:00", "2025-03-10T14:30:00", "2025-05-01T09:00:00"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn update_keeps_client_and_status_unless_given(pool: PgPool) {
    let app = build_test_app(pool);
    let token = register(&app, "ana@oficina.com").await;
    let client_id = create_client(&app, &token, "Ana").await;

    let created = post(
        &app,
        "/api/appointments",
        &token,
        json!({
            "client": { "kind": "existing", "clientId": client_id },
            "scheduledDate": "2025-03-10",
            "scheduledTime": "14:30"
        }),
    )
    .await;
    let id = created.body["id"].as_str().unwrap().to_string();

    let res = put(
        &app,
        &format!("/api/appointments/{}", id),
        &token,
        json!({ "scheduledDate": "2025-03-11", "scheduledTime": "10:00", "notes": "Levar trena a laser" }),
    )
    .await;
    assert_eq!(res.status, StatusCode::OK, "{}", res.body);
    assert_eq!(res.body["clientId"], client_id.as_str());
    assert_eq!(res.body["status"], "pending");
    assert_eq!(res.body["notes"], "Levar trena a laser");

    let res = put(
        &app,
        &format!("/api/appointments/{}", id),
        &token,
        json!({ "scheduledDate": "2025-03-11", "scheduledTime": "10:00", "status": "completed" }),
    )
    .await;
    assert_eq!(res.body["status"], "completed");
}

#[sqlx::test(migrations = "./migrations")]
async fn bad_time_is_a_validation_error(pool: PgPool) {
    let app = build_test_app(pool);
    let token = register(&app, "ana@oficina.com").await;
    let client_id = create_client(&app, &token, "Ana").await;

    let res = post(
        &app,
        "/api/appointments",
        &token,
        json!({
            "client": { "kind": "existing", "clientId": client_id },
            "scheduledDate": "2025-03-10",
            "scheduledTime": "25:99"
        }),
    )
    .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn delete_needs_confirmation(pool: PgPool) {
    let app = build_test_app(pool);
    let token = register(&app, "ana@oficina.com").await;
    let client_id = create_client(&app, &token, "Ana").await;

    let created = post(
        &app,
        "/api/appointments",
        &token,
        json!({
            "client": { "kind": "existing", "clientId": client_id },
            "scheduledDate": "2025-03-10",
            "scheduledTime": "14:30"
        }),
    )
    .await;
    let id = created.body["id"].as_str().unwrap().to_string();

    let res = delete(&app, &format!("/api/appointments/{}", id), &token).await;
    assert_eq!(res.status, StatusCode::PRECONDITION_REQUIRED);
    assert_eq!(get(&app, &format!("/api/appointments/{}", id), &token).await.status, StatusCode::OK);

    let res = delete(&app, &format!("/api/appointments/{}?confirm=false", id), &token).await;
    assert_eq!(res.status, StatusCode::PRECONDITION_REQUIRED);

    let res = delete(&app, &format!("/api/appointments/{}?confirm=true", id), &token).await;
    assert_eq!(res.status, StatusCode::NO_CONTENT);
    assert_eq!(get(&app, &format!("/api/appointments/{}", id), &token).await.status, StatusCode::NOT_FOUND);
}
