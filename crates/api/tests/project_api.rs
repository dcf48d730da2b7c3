//! HTTP-level integration tests for the `/api/projects` endpoints.
//!
//! Covers owner population, the ownership guard, the existence-before-
//! ownership ordering, and the partial-update policy.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, create_user_with_token, create_via_api, delete, delete_auth, get,
    post_json, post_json_auth, put_json_auth,
};
use serde_json::json;
use sqlx::PgPool;

fn project_body(title: &str) -> serde_json::Value {
    json!({
        "title": title,
        "description": "A thing I built",
        "technologies": ["rust", "axum"],
    })
}

// ---------------------------------------------------------------------------
// Create / read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_project_returns_201_with_owner(pool: PgPool) {
    let (user, token) = create_user_with_token(&pool, "alice", "user").await;

    let response = post_json_auth(
        build_test_app(pool),
        "/api/projects",
        project_body("Folio"),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Folio");
    assert_eq!(json["imageUrl"], "");
    assert_eq!(json["repoUrl"], "");
    assert_eq!(json["liveUrl"], "");
    assert_eq!(json["technologies"], json!(["rust", "axum"]));
    assert_eq!(json["userId"], user.id);
    assert_eq!(json["user"], json!({ "id": user.id, "username": "alice" }));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_project_without_token_returns_401(pool: PgPool) {
    let response = post_json(build_test_app(pool), "/api/projects", project_body("Nope")).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert_eq!(json["error"], "Not authorized, no token");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_project_with_garbage_token_returns_401(pool: PgPool) {
    let response = post_json_auth(
        build_test_app(pool),
        "/api/projects",
        project_body("Nope"),
        "not.a.jwt",
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "Not authorized, token failed");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_project_requires_title_and_description(pool: PgPool) {
    let (_user, token) = create_user_with_token(&pool, "alice", "user").await;

    let response = post_json_auth(
        build_test_app(pool.clone()),
        "/api/projects",
        json!({ "description": "no title" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let response = post_json_auth(
        build_test_app(pool),
        "/api/projects",
        json!({ "title": "no description", "description": "   " }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_projects_newest_first_with_owners(pool: PgPool) {
    let (_alice, alice_token) = create_user_with_token(&pool, "alice", "user").await;
    let (_bob, bob_token) = create_user_with_token(&pool, "bob", "user").await;

    let first = create_via_api(&pool, "/api/projects", project_body("First"), &alice_token).await;
    let second = create_via_api(&pool, "/api/projects", project_body("Second"), &bob_token).await;

    let response = get(build_test_app(pool), "/api/projects").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let items = json.as_array().expect("list should be an array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"], second);
    assert_eq!(items[0]["user"]["username"], "bob");
    assert_eq!(items[1]["id"], first);
    assert_eq!(items[1]["user"]["username"], "alice");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_missing_project_returns_404(pool: PgPool) {
    let response = get(build_test_app(pool), "/api/projects/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Project with id 999999 not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_project_with_non_numeric_id_returns_400(pool: PgPool) {
    let response = get(build_test_app(pool), "/api/projects/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn owner_can_partially_update_project(pool: PgPool) {
    let (_alice, token) = create_user_with_token(&pool, "alice", "user").await;
    let id = create_via_api(&pool, "/api/projects", project_body("Before"), &token).await;

    let response = put_json_auth(
        build_test_app(pool),
        &format!("/api/projects/{id}"),
        json!({ "title": "After", "liveUrl": "https://folio.example.com" }),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["title"], "After");
    assert_eq!(json["liveUrl"], "https://folio.example.com");
    assert_eq!(json["description"], "A thing I built");
    assert_eq!(json["technologies"], json!(["rust", "axum"]));
    assert_eq!(json["user"]["username"], "alice");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_technologies_replace_stored_list(pool: PgPool) {
    let (_alice, token) = create_user_with_token(&pool, "alice", "user").await;
    let id = create_via_api(&pool, "/api/projects", project_body("Stack"), &token).await;

    let response = put_json_auth(
        build_test_app(pool),
        &format!("/api/projects/{id}"),
        json!({ "technologies": [] }),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["technologies"], json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn null_fields_are_left_unchanged(pool: PgPool) {
    let (_alice, token) = create_user_with_token(&pool, "alice", "user").await;
    let id = create_via_api(&pool, "/api/projects", project_body("Keep"), &token).await;

    let response = put_json_auth(
        build_test_app(pool),
        &format!("/api/projects/{id}"),
        json!({ "title": null, "technologies": null }),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Keep");
    assert_eq!(json["technologies"], json!(["rust", "axum"]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn blank_title_on_update_is_rejected(pool: PgPool) {
    let (_alice, token) = create_user_with_token(&pool, "alice", "user").await;
    let id = create_via_api(&pool, "/api/projects", project_body("Keep"), &token).await;

    let response = put_json_auth(
        build_test_app(pool),
        &format!("/api/projects/{id}"),
        json!({ "title": "" }),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_owner_update_is_forbidden(pool: PgPool) {
    let (_alice, alice_token) = create_user_with_token(&pool, "alice", "user").await;
    let (_bob, bob_token) = create_user_with_token(&pool, "bob", "user").await;
    let id = create_via_api(&pool, "/api/projects", project_body("Mine"), &alice_token).await;

    let response = put_json_auth(
        build_test_app(pool.clone()),
        &format!("/api/projects/{id}"),
        json!({ "title": "Stolen" }),
        &bob_token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["code"], "FORBIDDEN");
    assert_eq!(json["error"], "Not authorized to update this project");

    let response = get(build_test_app(pool), &format!("/api/projects/{id}")).await;
    assert_eq!(body_json(response).await["title"], "Mine");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn admin_who_is_not_owner_is_forbidden(pool: PgPool) {
    let (_alice, alice_token) = create_user_with_token(&pool, "alice", "user").await;
    let (_root, admin_token) = create_user_with_token(&pool, "root", "admin").await;
    let id = create_via_api(&pool, "/api/projects", project_body("Mine"), &alice_token).await;

    let response = delete_auth(
        build_test_app(pool),
        &format!("/api/projects/{id}"),
        &admin_token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_missing_project_returns_404_before_ownership(pool: PgPool) {
    let (_bob, bob_token) = create_user_with_token(&pool, "bob", "user").await;

    let response = put_json_auth(
        build_test_app(pool),
        "/api/projects/424242",
        json!({ "title": "Whatever" }),
        &bob_token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn owner_can_delete_project(pool: PgPool) {
    let (_alice, token) = create_user_with_token(&pool, "alice", "user").await;
    let id = create_via_api(&pool, "/api/projects", project_body("Gone"), &token).await;

    let response = delete_auth(
        build_test_app(pool.clone()),
        &format!("/api/projects/{id}"),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "message": "Project removed" }));

    let response = get(build_test_app(pool), &format!("/api/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_owner_delete_is_forbidden(pool: PgPool) {
    let (_alice, alice_token) = create_user_with_token(&pool, "alice", "user").await;
    let (_bob, bob_token) = create_user_with_token(&pool, "bob", "user").await;
    let id = create_via_api(&pool, "/api/projects", project_body("Mine"), &alice_token).await;

    let response = delete_auth(
        build_test_app(pool.clone()),
        &format!("/api/projects/{id}"),
        &bob_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        body_json(response).await["error"],
        "Not authorized to delete this project"
    );

    let response = get(build_test_app(pool), &format!("/api/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_without_token_returns_401(pool: PgPool) {
    let response = delete(build_test_app(pool), "/api/projects/1").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
