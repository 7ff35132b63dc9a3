//! Bank accounts.
//!
//! Accounts never store a balance; the ledger derives figures from the
//! transaction stream. Deletion is a soft flag (`active = false`) so that
//! historical transactions keep a resolvable account reference.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Currency, LedgerError};
use crate::util::parse_uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    Checking,
    Savings,
}

impl AccountType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Checking => "checking",
            Self::Savings => "savings",
        }
    }
}

impl TryFrom<&str> for AccountType {
    type Error = LedgerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "checking" => Ok(Self::Checking),
            "savings" => Ok(Self::Savings),
            other => Err(LedgerError::InvalidRequest(format!(
                "invalid account type: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub user_id: String,
    pub name: String,
    pub kind: AccountType,
    pub currency: Currency,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub kind: String,
    pub currency: String,
    pub active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Account> for ActiveModel {
    fn from(account: &Account) -> Self {
        Self {
            id: ActiveValue::Set(account.id.to_string()),
            user_id: ActiveValue::Set(account.user_id.clone()),
            name: ActiveValue::Set(account.name.clone()),
            kind: ActiveValue::Set(account.kind.as_str().to_string()),
            currency: ActiveValue::Set(account.currency.code().to_string()),
            active: ActiveValue::Set(account.active),
            created_at: ActiveValue::Set(account.created_at),
            updated_at: ActiveValue::Set(account.updated_at),
        }
    }
}

impl TryFrom<Model> for Account {
    type Error = LedgerError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: parse_uuid(&model.id, "account")?,
            user_id: model.user_id,
            name: model.name,
            kind: AccountType::try_from(model.kind.as_str())?,
            currency: Currency::try_from(model.currency.as_str())?,
            active: model.active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
