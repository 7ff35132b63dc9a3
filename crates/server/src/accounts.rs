//! Accounts API endpoints

use api_types::account::{
    AccountKind as ApiKind, AccountNew, AccountUpdate, AccountView, AccountsResponse,
};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{
    ServerError,
    server::ServerState,
    transactions::{currency_from_api, map_currency},
};
use ledger::{Account, users};

fn map_kind(kind: ledger::AccountType) -> ApiKind {
    match kind {
        ledger::AccountType::Checking => ApiKind::Checking,
        ledger::AccountType::Savings => ApiKind::Savings,
    }
}

fn kind_from_api(kind: ApiKind) -> ledger::AccountType {
    match kind {
        ApiKind::Checking => ledger::AccountType::Checking,
        ApiKind::Savings => ledger::AccountType::Savings,
    }
}

fn map_account(account: Account) -> AccountView {
    AccountView {
        id: account.id,
        name: account.name,
        kind: map_kind(account.kind),
        currency: map_currency(account.currency),
        active: account.active,
        created_at: account.created_at,
        updated_at: account.updated_at,
    }
}

pub async fn create(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Json(payload): Json<AccountNew>,
) -> Result<(StatusCode, Json<AccountView>), ServerError> {
    let account = state
        .ledger
        .create_account(
            &user.username,
            &payload.name,
            kind_from_api(payload.kind),
            currency_from_api(payload.currency),
        )
        .await?;
    Ok((StatusCode::CREATED, Json(map_account(account))))
}

pub async fn list(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
) -> Result<Json<AccountsResponse>, ServerError> {
    let accounts = state.ledger.user_accounts(&user.username, false).await?;
    Ok(Json(AccountsResponse {
        accounts: accounts.into_iter().map(map_account).collect(),
    }))
}

pub async fn get(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AccountView>, ServerError> {
    let account = state.ledger.account(&user.username, id).await?;
    Ok(Json(map_account(account)))
}

pub async fn update(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AccountUpdate>,
) -> Result<Json<AccountView>, ServerError> {
    let account = state
        .ledger
        .update_account(&user.username, id, payload.name.as_deref())
        .await?;
    Ok(Json(map_account(account)))
}

pub async fn delete(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ServerError> {
    state.ledger.deactivate_account(&user.username, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
