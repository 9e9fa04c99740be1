//! Role route integration tests.

mod common;

use common::TestApp;
use serde_json::json;
use uuid::Uuid;

async fn list_roles(app: &TestApp) -> Vec<serde_json::Value> {
    app.client()
        .get(format!("{}/api/roles", app.address))
        .send()
        .await
        .expect("Failed to execute request")
        .json::<Vec<serde_json::Value>>()
        .await
        .expect("Failed to parse response")
}

#[tokio::test]
async fn create_and_delete_role() {
    let app = TestApp::spawn().await;
    let client = app.client();

    let response = client
        .post(format!("{}/api/roles", app.address))
        .json(&json!({ "name": "Auditor", "icon": "eye" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), 201);

    let created: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(created["name"], "Auditor");
    assert_eq!(created["icon"], "eye");
    let id = created["id"].as_str().expect("id missing").to_string();

    assert_eq!(list_roles(&app).await.len(), 1);

    let response = client
        .delete(format!("{}/api/roles/{}", app.address, id))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), 204);

    assert!(list_roles(&app).await.is_empty());
}

#[tokio::test]
async fn absent_fields_take_defaults() {
    let app = TestApp::spawn().await;

    let created: serde_json::Value = app
        .client()
        .post(format!("{}/api/roles", app.address))
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");

    assert_eq!(created["name"], "");
    assert_eq!(created["permissions"], json!([]));
    assert_eq!(created["icon"], "user");
    assert!(created["id"].is_string());
}

#[tokio::test]
async fn unrecognized_icon_tag_is_tolerated() {
    let app = TestApp::spawn().await;

    let created: serde_json::Value = app
        .client()
        .post(format!("{}/api/roles", app.address))
        .json(&json!({ "name": "Dragonkeeper", "icon": "dragon" }))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");

    assert_eq!(created["icon"], "unknown");
}

#[tokio::test]
async fn delete_unknown_role_is_a_silent_no_op() {
    let app = TestApp::spawn().await;

    let response = app
        .client()
        .delete(format!("{}/api/roles/{}", app.address, Uuid::new_v4()))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 204);
}

#[tokio::test]
async fn delete_with_malformed_id_is_a_silent_no_op() {
    let app = TestApp::spawn().await;

    let response = app
        .client()
        .delete(format!("{}/api/roles/not-a-uuid", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 204);
}
