use axum::{
    Router,
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Basic},
};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use std::sync::Arc;

use crate::{accounts, allocations, categories, dashboard, transactions};
use ledger::{Ledger, users};

#[derive(Clone)]
pub struct ServerState {
    pub ledger: Arc<Ledger>,
    pub db: DatabaseConnection,
}

async fn auth(
    auth_header: TypedHeader<Authorization<Basic>>,
    State(state): State<ServerState>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    if auth_header.username().is_empty() || auth_header.password().is_empty() {
        return Err(StatusCode::UNAUTHORIZED);
    }

    let user: Option<users::Model> = users::Entity::find()
        .filter(users::Column::Username.eq(auth_header.username()))
        .filter(users::Column::Password.eq(auth_header.password()))
        .one(&state.db)
        .await
        .map_err(|_| StatusCode::UNAUTHORIZED)?;

    let Some(user) = user else {
        return Err(StatusCode::UNAUTHORIZED);
    };

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Builds the application router; exposed so tests can drive it directly.
pub fn router(state: ServerState) -> Router {
    Router::new()
        .route(
            "/transactions",
            post(transactions::create).get(transactions::list),
        )
        .route(
            "/transactions/{id}",
            get(transactions::get)
                .patch(transactions::update)
                .delete(transactions::delete),
        )
        .route("/transfers", post(transactions::create_transfer))
        .route(
            "/transfers/{group_id}",
            get(transactions::get_transfer),
        )
        .route(
            "/accounts",
            post(accounts::create).get(accounts::list),
        )
        .route(
            "/accounts/{id}",
            get(accounts::get)
                .patch(accounts::update)
                .delete(accounts::delete),
        )
        .route(
            "/accounts/{id}/transactions",
            get(transactions::list_for_account),
        )
        .route(
            "/categories",
            post(categories::create).get(categories::list),
        )
        .route(
            "/categories/{id}",
            axum::routing::patch(categories::update).delete(categories::delete),
        )
        .route(
            "/allocations",
            post(allocations::create).get(allocations::list),
        )
        .route(
            "/allocations/{id}",
            axum::routing::delete(allocations::delete),
        )
        .route("/dashboard", get(dashboard::get))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth))
        .with_state(state)
}

pub async fn run(ledger: Ledger, db: DatabaseConnection) {
    let listener = match tokio::net::TcpListener::bind("127.0.0.1:3000").await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener: {err}");
            return;
        }
    };
    if let Err(err) = run_with_listener(ledger, db, listener).await {
        tracing::error!("server failed: {err}");
    }
}

pub async fn run_with_listener(
    ledger: Ledger,
    db: DatabaseConnection,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState {
        ledger: Arc::new(ledger),
        db,
    };

    axum::serve(listener, router(state)).await
}

pub fn spawn_with_listener(
    ledger: Ledger,
    db: DatabaseConnection,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(ledger, db, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
