//! End-to-end router tests over an in-memory database.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use base64::Engine as _;
use http_body_util::BodyExt;
use sea_orm::{ConnectionTrait, Database, Statement};
use serde_json::{Value, json};
use tower::ServiceExt;

use migration::MigratorTrait;
use server::{ServerState, router};

async fn test_router() -> Router {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let backend = db.get_database_backend();
    db.execute(Statement::from_sql_and_values(
        backend,
        "INSERT INTO users (username, password) VALUES (?, ?)",
        vec!["alice".into(), "password".into()],
    ))
    .await
    .unwrap();

    let ledger = ledger::Ledger::builder().database(db.clone()).build();
    router(ServerState {
        ledger: Arc::new(ledger),
        db,
    })
}

fn basic_auth() -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode("alice:password");
    format!("Basic {encoded}")
}

fn request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, basic_auth())
        .header(header::CONTENT_TYPE, "application/json");
    match body {
        Some(value) => builder
            .body(Body::from(serde_json::to_vec(&value).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn create_account(app: &Router, name: &str) -> String {
    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/accounts",
            Some(json!({"name": name, "kind": "checking", "currency": "EGP"})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response).await["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn rejects_missing_credentials() {
    let app = test_router().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/dashboard")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    // Missing Authorization header is rejected before any handler runs.
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn transfer_round_trip_with_cascade_delete() {
    let app = test_router().await;
    let from = create_account(&app, "Checking").await;
    let to = create_account(&app, "Savings").await;

    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/transfers",
            Some(json!({
                "from_account_id": from,
                "to_account_id": to,
                "amount_minor": 50_000,
                "currency": "EGP",
                "transfer_date": "2024-03-10",
                "description": "rent",
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let transfer = json_body(response).await;
    let group_id = transfer["transfer_group_id"].as_str().unwrap().to_string();
    let outgoing_id = transfer["outgoing"]["id"].as_str().unwrap().to_string();
    assert_eq!(transfer["outgoing"]["transfer_direction"], "out");
    assert_eq!(transfer["incoming"]["transfer_direction"], "in");
    assert_eq!(
        transfer["outgoing"]["transfer_group_id"],
        transfer["incoming"]["transfer_group_id"]
    );

    // Deleting one leg removes the whole group.
    let response = app
        .clone()
        .oneshot(request(
            "DELETE",
            &format!("/transactions/{outgoing_id}"),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(request("GET", &format!("/transfers/{group_id}"), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .clone()
        .oneshot(request(
            "GET",
            &format!("/accounts/{from}/transactions"),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["transactions"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn transfer_kind_rejected_on_transaction_endpoint() {
    let app = test_router().await;
    let account = create_account(&app, "Main").await;

    let response = app
        .oneshot(request(
            "POST",
            "/transactions",
            Some(json!({
                "account_id": account,
                "kind": "transfer",
                "amount_minor": 1000,
                "currency": "EGP",
                "transaction_date": "2024-03-10",
                "description": "move",
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn income_shows_up_on_dashboard() {
    let app = test_router().await;
    let account = create_account(&app, "Main").await;

    // Dated today, so it always lands inside the current month window.
    let today = chrono::Utc::now().date_naive();
    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/transactions",
            Some(json!({
                "account_id": account,
                "kind": "income",
                "amount_minor": 100_000,
                "currency": "EGP",
                "transaction_date": today.to_string(),
                "description": "salary",
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(request("GET", "/dashboard", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["monthly_income_minor"], 100_000);
    assert_eq!(body["monthly_expense_minor"], 0);
    assert_eq!(body["monthly_savings_minor"], 100_000);
    assert_eq!(body["total_liquid_minor"], 0);
}

#[tokio::test]
async fn empty_patch_rejected() {
    let app = test_router().await;
    let account = create_account(&app, "Main").await;

    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/transactions",
            Some(json!({
                "account_id": account,
                "kind": "expense",
                "amount_minor": 2500,
                "currency": "EGP",
                "transaction_date": "2024-03-05",
                "description": "lunch",
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = json_body(response).await["id"].as_str().unwrap().to_string();

    let response = app
        .oneshot(request(
            "PATCH",
            &format!("/transactions/{id}"),
            Some(json!({})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
