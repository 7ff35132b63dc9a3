//! Allocations: named pools of committed funds (deposits, goals, envelopes).
//!
//! The dashboard folds allocations into the wealth figures; the transaction
//! write path never touches them. Allocations are hard-deleted.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Currency, LedgerError};
use crate::util::{parse_optional_uuid, parse_uuid};

/// Whether the pool lives inside a bank account or stands on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerType {
    AccountBased,
    Standalone,
}

impl ContainerType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AccountBased => "account_based",
            Self::Standalone => "standalone",
        }
    }
}

impl TryFrom<&str> for ContainerType {
    type Error = LedgerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "account_based" => Ok(Self::AccountBased),
            "standalone" => Ok(Self::Standalone),
            other => Err(LedgerError::InvalidRequest(format!(
                "invalid container type: {other}"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationStatus {
    Active,
    Matured,
    Released,
}

impl AllocationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Matured => "matured",
            Self::Released => "released",
        }
    }
}

impl TryFrom<&str> for AllocationStatus {
    type Error = LedgerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "active" => Ok(Self::Active),
            "matured" => Ok(Self::Matured),
            "released" => Ok(Self::Released),
            other => Err(LedgerError::InvalidRequest(format!(
                "invalid allocation status: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub id: Uuid,
    pub user_id: String,
    pub account_id: Option<Uuid>,
    pub container_type: ContainerType,
    pub name: String,
    pub amount_minor: i64,
    pub currency: Currency,
    pub start_date: NaiveDate,
    pub maturity_date: Option<NaiveDate>,
    pub status: AllocationStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "allocations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub account_id: Option<String>,
    pub container_type: String,
    pub name: String,
    pub amount_minor: i64,
    pub currency: String,
    pub start_date: Date,
    pub maturity_date: Option<Date>,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Allocation> for ActiveModel {
    fn from(allocation: &Allocation) -> Self {
        Self {
            id: ActiveValue::Set(allocation.id.to_string()),
            user_id: ActiveValue::Set(allocation.user_id.clone()),
            account_id: ActiveValue::Set(allocation.account_id.map(|id| id.to_string())),
            container_type: ActiveValue::Set(allocation.container_type.as_str().to_string()),
            name: ActiveValue::Set(allocation.name.clone()),
            amount_minor: ActiveValue::Set(allocation.amount_minor),
            currency: ActiveValue::Set(allocation.currency.code().to_string()),
            start_date: ActiveValue::Set(allocation.start_date),
            maturity_date: ActiveValue::Set(allocation.maturity_date),
            status: ActiveValue::Set(allocation.status.as_str().to_string()),
            notes: ActiveValue::Set(allocation.notes.clone()),
            created_at: ActiveValue::Set(allocation.created_at),
            updated_at: ActiveValue::Set(allocation.updated_at),
        }
    }
}

impl TryFrom<Model> for Allocation {
    type Error = LedgerError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: parse_uuid(&model.id, "allocation")?,
            user_id: model.user_id,
            account_id: parse_optional_uuid(model.account_id.as_deref(), "account")?,
            container_type: ContainerType::try_from(model.container_type.as_str())?,
            name: model.name,
            amount_minor: model.amount_minor,
            currency: Currency::try_from(model.currency.as_str())?,
            start_date: model.start_date,
            maturity_date: model.maturity_date,
            status: AllocationStatus::try_from(model.status.as_str())?,
            notes: model.notes,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
