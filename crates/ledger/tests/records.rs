//! CRUD behavior of the record collaborators: accounts, categories,
//! allocations.

use chrono::NaiveDate;
use sea_orm::{ConnectionTrait, Database, Statement};
use uuid::Uuid;

use ledger::{
    AccountType, CategoryKind, ContainerType, CreateAllocationCmd, Currency, Ledger, LedgerError,
};
use migration::MigratorTrait;

async fn ledger_with_db() -> Ledger {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let backend = db.get_database_backend();
    for username in ["alice", "bob"] {
        db.execute(Statement::from_sql_and_values(
            backend,
            "INSERT INTO users (username, password) VALUES (?, ?)",
            vec![username.into(), "password".into()],
        ))
        .await
        .unwrap();
    }
    Ledger::builder().database(db).build()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[tokio::test]
async fn account_lifecycle() {
    let ledger = ledger_with_db().await;

    let account = ledger
        .create_account("alice", "Main", AccountType::Checking, Currency::Egp)
        .await
        .unwrap();
    assert!(account.active);

    let renamed = ledger
        .update_account("alice", account.id, Some("Salary account"))
        .await
        .unwrap();
    assert_eq!(renamed.name, "Salary account");

    // Empty patch is rejected, not silently accepted.
    let err = ledger
        .update_account("alice", account.id, None)
        .await
        .unwrap_err();
    assert!(matches!(err, LedgerError::InvalidRequest(_)));

    ledger.deactivate_account("alice", account.id).await.unwrap();
    assert!(ledger.user_accounts("alice", false).await.unwrap().is_empty());
    // Still visible when inactive rows are requested.
    let all = ledger.user_accounts("alice", true).await.unwrap();
    assert_eq!(all.len(), 1);
    assert!(!all[0].active);
}

#[tokio::test]
async fn account_names_are_trimmed_and_bounded() {
    let ledger = ledger_with_db().await;

    let account = ledger
        .create_account("alice", "  Main  ", AccountType::Savings, Currency::Usd)
        .await
        .unwrap();
    assert_eq!(account.name, "Main");

    let err = ledger
        .create_account("alice", "   ", AccountType::Savings, Currency::Usd)
        .await
        .unwrap_err();
    assert!(matches!(err, LedgerError::InvalidRequest(_)));
}

#[tokio::test]
async fn accounts_are_user_scoped() {
    let ledger = ledger_with_db().await;
    let account = ledger
        .create_account("alice", "Main", AccountType::Checking, Currency::Egp)
        .await
        .unwrap();

    let err = ledger.account("bob", account.id).await.unwrap_err();
    assert_eq!(err, LedgerError::NotFound("account not exists".to_string()));
    assert!(ledger.user_accounts("bob", true).await.unwrap().is_empty());
}

#[tokio::test]
async fn category_lifecycle() {
    let ledger = ledger_with_db().await;

    let category = ledger
        .create_category("alice", "Groceries", CategoryKind::Expense)
        .await
        .unwrap();

    let renamed = ledger
        .update_category("alice", category.id, Some("Food"))
        .await
        .unwrap();
    assert_eq!(renamed.name, "Food");

    ledger
        .deactivate_category("alice", category.id)
        .await
        .unwrap();
    assert!(ledger.user_categories("alice").await.unwrap().is_empty());

    // A deactivated category no longer resolves for new writes.
    let err = ledger
        .update_category("alice", category.id, Some("Again"))
        .await
        .unwrap_err();
    assert_eq!(err, LedgerError::NotFound("category not exists".to_string()));
}

#[tokio::test]
async fn account_based_allocation_requires_account() {
    let ledger = ledger_with_db().await;

    let err = ledger
        .create_allocation(CreateAllocationCmd::new(
            "alice",
            ContainerType::AccountBased,
            "Fixed deposit",
            100_000,
            Currency::Egp,
            date(2024, 1, 1),
        ))
        .await
        .unwrap_err();
    assert!(matches!(err, LedgerError::InvalidRequest(_)));
}

#[tokio::test]
async fn allocation_lifecycle() {
    let ledger = ledger_with_db().await;

    let allocation = ledger
        .create_allocation(CreateAllocationCmd::new(
            "alice",
            ContainerType::Standalone,
            "Emergency fund",
            100_000,
            Currency::Egp,
            date(2024, 1, 1),
        ))
        .await
        .unwrap();
    assert_eq!(
        allocation.status,
        ledger::AllocationStatus::Active
    );

    // Not visible to, nor deletable by, another user.
    let err = ledger
        .delete_allocation("bob", allocation.id)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        LedgerError::NotFound("allocation not exists".to_string())
    );

    ledger
        .delete_allocation("alice", allocation.id)
        .await
        .unwrap();
    assert!(ledger.user_allocations("alice").await.unwrap().is_empty());

    let err = ledger
        .delete_allocation("alice", Uuid::new_v4())
        .await
        .unwrap_err();
    assert_eq!(
        err,
        LedgerError::NotFound("allocation not exists".to_string())
    );
}

#[tokio::test]
async fn allocation_rejects_non_positive_amount() {
    let ledger = ledger_with_db().await;

    let err = ledger
        .create_allocation(CreateAllocationCmd::new(
            "alice",
            ContainerType::Standalone,
            "Empty",
            0,
            Currency::Egp,
            date(2024, 1, 1),
        ))
        .await
        .unwrap_err();
    assert!(matches!(err, LedgerError::InvalidRequest(_)));
}
