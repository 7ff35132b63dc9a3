//! Category record management: user-scoped CRUD with soft delete.

use chrono::Utc;
use sea_orm::{ActiveValue, QueryFilter, QueryOrder, TransactionTrait, prelude::*};
use uuid::Uuid;

use crate::{Category, CategoryKind, LedgerError, ResultLedger, categories};

use super::{Ledger, normalize_required_text, with_tx};

impl Ledger {
    pub async fn create_category(
        &self,
        user_id: &str,
        name: &str,
        kind: CategoryKind,
    ) -> ResultLedger<Category> {
        let name = normalize_required_text(name, "category name", 255)?;

        with_tx!(self, |db_tx| {
            self.require_user_exists(&db_tx, user_id).await?;

            let now = Utc::now();
            let category = Category {
                id: Uuid::new_v4(),
                user_id: user_id.to_string(),
                name,
                kind,
                active: true,
                created_at: now,
                updated_at: now,
            };
            categories::ActiveModel::from(&category)
                .insert(&db_tx)
                .await?;
            Ok(category)
        })
    }

    pub async fn user_categories(&self, user_id: &str) -> ResultLedger<Vec<Category>> {
        with_tx!(self, |db_tx| {
            self.require_user_exists(&db_tx, user_id).await?;
            let rows = categories::Entity::find()
                .filter(categories::Column::UserId.eq(user_id.to_string()))
                .filter(categories::Column::Active.eq(true))
                .order_by_asc(categories::Column::CreatedAt)
                .all(&db_tx)
                .await?;
            rows.into_iter().map(Category::try_from).collect()
        })
    }

    /// Partial update; only the name is mutable today. An empty patch is
    /// rejected rather than silently succeeding.
    pub async fn update_category(
        &self,
        user_id: &str,
        category_id: Uuid,
        name: Option<&str>,
    ) -> ResultLedger<Category> {
        let Some(name) = name else {
            return Err(LedgerError::InvalidRequest(
                "update requires at least one field".to_string(),
            ));
        };
        let name = normalize_required_text(name, "category name", 255)?;

        with_tx!(self, |db_tx| {
            let model = self
                .require_category_owned(&db_tx, user_id, category_id)
                .await?;
            let mut category = Category::try_from(model)?;
            category.name = name;
            category.updated_at = Utc::now();

            let active_model = categories::ActiveModel {
                id: ActiveValue::Set(category.id.to_string()),
                name: ActiveValue::Set(category.name.clone()),
                updated_at: ActiveValue::Set(category.updated_at),
                ..Default::default()
            };
            active_model.update(&db_tx).await?;
            Ok(category)
        })
    }

    /// Soft-deletes a category (`active = false`); transactions keep their
    /// category reference.
    pub async fn deactivate_category(&self, user_id: &str, category_id: Uuid) -> ResultLedger<()> {
        with_tx!(self, |db_tx| {
            let model = self
                .require_category_owned(&db_tx, user_id, category_id)
                .await?;
            let active_model = categories::ActiveModel {
                id: ActiveValue::Set(model.id),
                active: ActiveValue::Set(false),
                updated_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            };
            active_model.update(&db_tx).await?;
            Ok(())
        })
    }
}
