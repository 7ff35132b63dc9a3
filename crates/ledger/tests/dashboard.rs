use chrono::NaiveDate;
use sea_orm::{ConnectionTrait, Database, Statement};

use ledger::{
    AccountType, ContainerType, CreateAllocationCmd, CreateTransactionCmd, CreateTransferCmd,
    Currency, Ledger, LedgerError, TransactionType,
};
use migration::MigratorTrait;
use uuid::Uuid;

async fn ledger_with_db() -> Ledger {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let backend = db.get_database_backend();
    db.execute(Statement::from_sql_and_values(
        backend,
        "INSERT INTO users (username, password) VALUES (?, ?)",
        vec!["alice".into(), "password".into()],
    ))
    .await
    .unwrap();
    Ledger::builder().database(db).build()
}

async fn new_account(ledger: &Ledger, name: &str) -> Uuid {
    ledger
        .create_account("alice", name, AccountType::Checking, Currency::Egp)
        .await
        .unwrap()
        .id
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[tokio::test]
async fn monthly_figures_cover_current_month_only() {
    let ledger = ledger_with_db().await;
    let account_id = new_account(&ledger, "Main").await;

    // Inside the March window, including the first day.
    ledger
        .create_transaction(CreateTransactionCmd::new(
            "alice",
            account_id,
            TransactionType::Income,
            100_000,
            Currency::Egp,
            date(2024, 3, 1),
            "salary",
        ))
        .await
        .unwrap();
    ledger
        .create_transaction(CreateTransactionCmd::new(
            "alice",
            account_id,
            TransactionType::Expense,
            25_000,
            Currency::Egp,
            date(2024, 3, 10),
            "groceries",
        ))
        .await
        .unwrap();
    // February rows stay out of a March dashboard.
    ledger
        .create_transaction(CreateTransactionCmd::new(
            "alice",
            account_id,
            TransactionType::Income,
            999_999,
            Currency::Egp,
            date(2024, 2, 28),
            "old salary",
        ))
        .await
        .unwrap();

    let summary = ledger.dashboard("alice", date(2024, 3, 15)).await.unwrap();
    assert_eq!(summary.monthly_income_minor, 100_000);
    assert_eq!(summary.monthly_expense_minor, 25_000);
    assert_eq!(summary.monthly_savings_minor, 75_000);

    // A February reference date sees the February row instead.
    let summary = ledger.dashboard("alice", date(2024, 2, 28)).await.unwrap();
    assert_eq!(summary.monthly_income_minor, 999_999 + 100_000);
}

#[tokio::test]
async fn savings_may_go_negative() {
    let ledger = ledger_with_db().await;
    let account_id = new_account(&ledger, "Main").await;

    ledger
        .create_transaction(CreateTransactionCmd::new(
            "alice",
            account_id,
            TransactionType::Expense,
            5000,
            Currency::Egp,
            date(2024, 3, 10),
            "groceries",
        ))
        .await
        .unwrap();

    let summary = ledger.dashboard("alice", date(2024, 3, 15)).await.unwrap();
    assert_eq!(summary.monthly_income_minor, 0);
    assert_eq!(summary.monthly_expense_minor, 5000);
    assert_eq!(summary.monthly_savings_minor, -5000);
}

#[tokio::test]
async fn transfers_and_adjustments_do_not_affect_reports() {
    let ledger = ledger_with_db().await;
    let from = new_account(&ledger, "Checking").await;
    let to = new_account(&ledger, "Savings").await;

    ledger
        .create_transfer(CreateTransferCmd::new(
            "alice",
            from,
            to,
            50_000,
            Currency::Egp,
            date(2024, 3, 10),
            "rent",
        ))
        .await
        .unwrap();
    ledger
        .create_transaction(CreateTransactionCmd::new(
            "alice",
            from,
            TransactionType::Adjustment,
            10_000,
            Currency::Egp,
            date(2024, 3, 12),
            "balance correction",
        ))
        .await
        .unwrap();

    let summary = ledger.dashboard("alice", date(2024, 3, 15)).await.unwrap();
    assert_eq!(summary.monthly_income_minor, 0);
    assert_eq!(summary.monthly_expense_minor, 0);
    assert_eq!(summary.monthly_savings_minor, 0);
}

#[tokio::test]
async fn allocations_fold_into_wealth() {
    let ledger = ledger_with_db().await;
    let account_id = new_account(&ledger, "Main").await;

    ledger
        .create_allocation(
            CreateAllocationCmd::new(
                "alice",
                ContainerType::AccountBased,
                "Fixed deposit",
                150_000,
                Currency::Egp,
                date(2024, 1, 1),
            )
            .account_id(account_id)
            .maturity_date(date(2025, 1, 1)),
        )
        .await
        .unwrap();
    ledger
        .create_allocation(CreateAllocationCmd::new(
            "alice",
            ContainerType::Standalone,
            "Cash envelope",
            50_000,
            Currency::Usd,
            date(2024, 2, 1),
        ))
        .await
        .unwrap();

    let summary = ledger.dashboard("alice", date(2024, 3, 15)).await.unwrap();
    assert_eq!(summary.total_allocated_minor, 200_000);
    assert_eq!(summary.wealth_by_currency.get(&Currency::Egp), Some(&150_000));
    assert_eq!(summary.wealth_by_currency.get(&Currency::Usd), Some(&50_000));
    // Account balances are not derived; liquid assets stay zero.
    assert_eq!(summary.total_liquid_minor, 0);
    assert_eq!(summary.total_wealth_minor, 200_000);
}

#[tokio::test]
async fn dashboard_requires_known_user() {
    let ledger = ledger_with_db().await;

    let err = ledger
        .dashboard("mallory", date(2024, 3, 15))
        .await
        .unwrap_err();
    assert_eq!(err, LedgerError::NotFound("user not exists".to_string()));
}
