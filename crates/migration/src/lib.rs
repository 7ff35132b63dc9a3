pub use sea_orm_migration::prelude::*;

mod m20260210_090000_users;
mod m20260210_091000_accounts;
mod m20260210_092000_categories;
mod m20260210_093000_allocations;
mod m20260210_094000_transactions;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260210_090000_users::Migration),
            Box::new(m20260210_091000_accounts::Migration),
            Box::new(m20260210_092000_categories::Migration),
            Box::new(m20260210_093000_allocations::Migration),
            Box::new(m20260210_094000_transactions::Migration),
        ]
    }
}
