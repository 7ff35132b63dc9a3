//! Allocations API endpoints

use api_types::allocation::{
    AllocationNew, AllocationStatus as ApiStatus, AllocationView, AllocationsResponse,
    ContainerType as ApiContainer,
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
use ledger::{Allocation, CreateAllocationCmd, users};

fn map_container(container: ledger::ContainerType) -> ApiContainer {
    match container {
        ledger::ContainerType::AccountBased => ApiContainer::AccountBased,
        ledger::ContainerType::Standalone => ApiContainer::Standalone,
    }
}

fn container_from_api(container: ApiContainer) -> ledger::ContainerType {
    match container {
        ApiContainer::AccountBased => ledger::ContainerType::AccountBased,
        ApiContainer::Standalone => ledger::ContainerType::Standalone,
    }
}

fn map_status(status: ledger::AllocationStatus) -> ApiStatus {
    match status {
        ledger::AllocationStatus::Active => ApiStatus::Active,
        ledger::AllocationStatus::Matured => ApiStatus::Matured,
        ledger::AllocationStatus::Released => ApiStatus::Released,
    }
}

fn map_allocation(allocation: Allocation) -> AllocationView {
    AllocationView {
        id: allocation.id,
        account_id: allocation.account_id,
        container_type: map_container(allocation.container_type),
        name: allocation.name,
        amount_minor: allocation.amount_minor,
        currency: map_currency(allocation.currency),
        start_date: allocation.start_date,
        maturity_date: allocation.maturity_date,
        status: map_status(allocation.status),
        notes: allocation.notes,
        created_at: allocation.created_at,
        updated_at: allocation.updated_at,
    }
}

pub async fn create(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Json(payload): Json<AllocationNew>,
) -> Result<(StatusCode, Json<AllocationView>), ServerError> {
    let mut cmd = CreateAllocationCmd::new(
        user.username,
        container_from_api(payload.container_type),
        payload.name,
        payload.amount_minor,
        currency_from_api(payload.currency),
        payload.start_date,
    );
    cmd.account_id = payload.account_id;
    cmd.maturity_date = payload.maturity_date;
    cmd.notes = payload.notes;

    let allocation = state.ledger.create_allocation(cmd).await?;
    Ok((StatusCode::CREATED, Json(map_allocation(allocation))))
}

pub async fn list(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
) -> Result<Json<AllocationsResponse>, ServerError> {
    let allocations = state.ledger.user_allocations(&user.username).await?;
    Ok(Json(AllocationsResponse {
        allocations: allocations.into_iter().map(map_allocation).collect(),
    }))
}

pub async fn delete(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ServerError> {
    state.ledger.delete_allocation(&user.username, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
