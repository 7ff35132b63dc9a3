//! User-defined income/expense categories.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::LedgerError;
use crate::util::parse_uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    Income,
    Expense,
}

impl CategoryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl TryFrom<&str> for CategoryKind {
    type Error = LedgerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(LedgerError::InvalidRequest(format!(
                "invalid category kind: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub user_id: String,
    pub name: String,
    pub kind: CategoryKind,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub kind: String,
    pub active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Category> for ActiveModel {
    fn from(category: &Category) -> Self {
        Self {
            id: ActiveValue::Set(category.id.to_string()),
            user_id: ActiveValue::Set(category.user_id.clone()),
            name: ActiveValue::Set(category.name.clone()),
            kind: ActiveValue::Set(category.kind.as_str().to_string()),
            active: ActiveValue::Set(category.active),
            created_at: ActiveValue::Set(category.created_at),
            updated_at: ActiveValue::Set(category.updated_at),
        }
    }
}

impl TryFrom<Model> for Category {
    type Error = LedgerError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: parse_uuid(&model.id, "category")?,
            user_id: model.user_id,
            name: model.name,
            kind: CategoryKind::try_from(model.kind.as_str())?,
            active: model.active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
