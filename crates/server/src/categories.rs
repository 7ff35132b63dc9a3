//! Categories API endpoints

use api_types::category::{
    CategoriesResponse, CategoryKind as ApiKind, CategoryNew, CategoryUpdate, CategoryView,
};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{ServerError, server::ServerState};
use ledger::{Category, users};

fn map_kind(kind: ledger::CategoryKind) -> ApiKind {
    match kind {
        ledger::CategoryKind::Income => ApiKind::Income,
        ledger::CategoryKind::Expense => ApiKind::Expense,
    }
}

fn kind_from_api(kind: ApiKind) -> ledger::CategoryKind {
    match kind {
        ApiKind::Income => ledger::CategoryKind::Income,
        ApiKind::Expense => ledger::CategoryKind::Expense,
    }
}

fn map_category(category: Category) -> CategoryView {
    CategoryView {
        id: category.id,
        name: category.name,
        kind: map_kind(category.kind),
        active: category.active,
        created_at: category.created_at,
        updated_at: category.updated_at,
    }
}

pub async fn create(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Json(payload): Json<CategoryNew>,
) -> Result<(StatusCode, Json<CategoryView>), ServerError> {
    let category = state
        .ledger
        .create_category(&user.username, &payload.name, kind_from_api(payload.kind))
        .await?;
    Ok((StatusCode::CREATED, Json(map_category(category))))
}

pub async fn list(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
) -> Result<Json<CategoriesResponse>, ServerError> {
    let categories = state.ledger.user_categories(&user.username).await?;
    Ok(Json(CategoriesResponse {
        categories: categories.into_iter().map(map_category).collect(),
    }))
}

pub async fn update(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CategoryUpdate>,
) -> Result<Json<CategoryView>, ServerError> {
    let category = state
        .ledger
        .update_category(&user.username, id, payload.name.as_deref())
        .await?;
    Ok(Json(map_category(category)))
}

pub async fn delete(
    Extension(user): Extension<users::Model>,
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ServerError> {
    state.ledger.deactivate_category(&user.username, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
