//! Transactions API endpoints

use api_types::transaction::{
    TransactionKind as ApiKind, TransactionNew, TransactionUpdate, TransactionView,
    TransactionsResponse, TransferDirection as ApiDirection, TransferNew, TransferView,
};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{ServerError, server::ServerState};
use ledger::{
    CreateTransactionCmd, CreateTransferCmd, Transaction, UpdateTransactionCmd, users,
};

pub(crate) fn map_kind(kind: ledger::TransactionType) -> ApiKind {
    match kind {
        ledger::TransactionType::Income => ApiKind::Income,
        ledger::TransactionType::Expense => ApiKind::Expense,
        ledger::TransactionType::Transfer => ApiKind::Transfer,
        ledger::TransactionType::Adjustment => ApiKind::Adjustment,
    }
}

fn kind_from_api(kind: ApiKind) -> ledger::TransactionType {
    match kind {
        ApiKind::Income => ledger::TransactionType::Income,
        ApiKind::Expense => ledger::TransactionType::Expense,
        ApiKind::Transfer => ledger::TransactionType::Transfer,
        ApiKind::Adjustment => ledger::TransactionType::Adjustment,
    }
}

fn map_direction(direction: ledger::TransferDirection) -> ApiDirection {
    match direction {
        ledger::TransferDirection::Out => ApiDirection::Out,
        ledger::TransferDirection::In => ApiDirection::In,
    }
}

pub(crate) fn map_currency(currency: ledger::Currency) -> api_types::Currency {
    match currency {
        ledger::Currency::Egp => api_types::Currency::Egp,
        ledger::Currency::Usd => api_types::Currency::Usd,
    }
}

pub(crate) fn currency_from_api(currency: api_types::Currency) -> ledger::Currency {
    match currency {
        api_types::Currency::Egp => ledger::Currency::Egp,
        api_types::Currency::Usd => ledger::Currency::Usd,
    }
}

pub(crate) fn map_transaction(tx: Transaction) -> TransactionView {
    TransactionView {
        id: tx.id,
        account_id: tx.account_id,
        category_id: tx.category_id,
        kind: map_kind(tx.kind),
        transfer_direction: tx.transfer_direction.map(map_direction),
        transfer_group_id: tx.transfer_group_id,
        amount_minor: tx.amount_minor,
        currency: map_currency(tx.currency),
        transaction_date: tx.transaction_date,
        description: tx.description,
        fx_rate_micros: tx.fx_rate_micros,
        notes: tx.notes,
        created_at: tx.created_at,
        updated_at: tx.updated_at,
    }
}

pub async fn create(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Json(payload): Json<TransactionNew>,
) -> Result<(StatusCode, Json<TransactionView>), ServerError> {
    let mut cmd = CreateTransactionCmd::new(
        user.username,
        payload.account_id,
        kind_from_api(payload.kind),
        payload.amount_minor,
        currency_from_api(payload.currency),
        payload.transaction_date,
        payload.description,
    );
    cmd.category_id = payload.category_id;
    cmd.fx_rate_micros = payload.fx_rate_micros;
    cmd.notes = payload.notes;

    let tx = state.ledger.create_transaction(cmd).await?;
    Ok((StatusCode::CREATED, Json(map_transaction(tx))))
}

pub async fn create_transfer(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Json(payload): Json<TransferNew>,
) -> Result<(StatusCode, Json<TransferView>), ServerError> {
    let mut cmd = CreateTransferCmd::new(
        user.username,
        payload.from_account_id,
        payload.to_account_id,
        payload.amount_minor,
        currency_from_api(payload.currency),
        payload.transfer_date,
        payload.description,
    );
    cmd.fx_rate_micros = payload.fx_rate_micros;
    cmd.notes = payload.notes;

    let transfer = state.ledger.create_transfer(cmd).await?;
    Ok((
        StatusCode::CREATED,
        Json(TransferView {
            transfer_group_id: transfer.transfer_group_id,
            outgoing: map_transaction(transfer.outgoing),
            incoming: map_transaction(transfer.incoming),
        }),
    ))
}

pub async fn get(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TransactionView>, ServerError> {
    let tx = state.ledger.transaction(&user.username, id).await?;
    Ok(Json(map_transaction(tx)))
}

pub async fn get_transfer(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Path(group_id): Path<Uuid>,
) -> Result<Json<TransferView>, ServerError> {
    let transfer = state.ledger.transfer_legs(&user.username, group_id).await?;
    Ok(Json(TransferView {
        transfer_group_id: transfer.transfer_group_id,
        outgoing: map_transaction(transfer.outgoing),
        incoming: map_transaction(transfer.incoming),
    }))
}

pub async fn list(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
) -> Result<Json<TransactionsResponse>, ServerError> {
    let txs = state.ledger.user_transactions(&user.username).await?;
    Ok(Json(TransactionsResponse {
        transactions: txs.into_iter().map(map_transaction).collect(),
    }))
}

pub async fn list_for_account(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Path(account_id): Path<Uuid>,
) -> Result<Json<TransactionsResponse>, ServerError> {
    let txs = state
        .ledger
        .account_transactions(&user.username, account_id)
        .await?;
    Ok(Json(TransactionsResponse {
        transactions: txs.into_iter().map(map_transaction).collect(),
    }))
}

pub async fn update(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<TransactionUpdate>,
) -> Result<Json<TransactionView>, ServerError> {
    let mut cmd = UpdateTransactionCmd::new(user.username, id);
    cmd.category_id = payload.category_id;
    cmd.amount_minor = payload.amount_minor;
    cmd.transaction_date = payload.transaction_date;
    cmd.description = payload.description;
    cmd.fx_rate_micros = payload.fx_rate_micros;
    cmd.notes = payload.notes;

    let tx = state.ledger.update_transaction(cmd).await?;
    Ok(Json(map_transaction(tx)))
}

pub async fn delete(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ServerError> {
    state.ledger.delete_transaction(&user.username, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
