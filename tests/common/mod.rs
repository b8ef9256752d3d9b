use std::sync::Arc;

use tradebook_core::accounts::{
    Account, AccountRepository, AccountService, AccountServiceTrait, NewAccount,
};
use tradebook_core::db::{self, DbPool};
use tradebook_core::ledger::{LedgerRepository, LedgerService};
use tradebook_core::positions::PositionService;
use tradebook_core::quotes::StaticQuoteProvider;
use tradebook_core::trading::TradeExecutor;

/// Everything wired together against a throwaway database file.
/// The database directory is removed again when the engine is dropped.
pub struct TestEngine {
    pub pool: Arc<DbPool>,
    pub quotes: Arc<StaticQuoteProvider>,
    pub accounts: AccountService,
    pub ledger: LedgerService,
    pub positions: PositionService,
    pub executor: Arc<TradeExecutor>,
    db_dir: String,
}

impl Drop for TestEngine {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.db_dir);
    }
}

pub fn setup(test_id: &str) -> TestEngine {
    let db_dir = format!("./tests/output/{}-{}", test_id, uuid::Uuid::new_v4());

    let db_path = db::init(&db_dir).expect("Failed to initialize database");
    let pool = db::create_pool(&db_path).expect("Failed to create database pool");
    db::run_migrations(&pool).expect("Failed to run migrations");

    let account_repository = Arc::new(AccountRepository::new(pool.clone()));
    let ledger_repository = Arc::new(LedgerRepository::new(pool.clone()));
    let quotes = Arc::new(StaticQuoteProvider::new());

    TestEngine {
        accounts: AccountService::new(account_repository.clone()),
        ledger: LedgerService::new(ledger_repository.clone()),
        positions: PositionService::new(
            ledger_repository.clone(),
            account_repository.clone(),
            quotes.clone(),
        ),
        executor: Arc::new(TradeExecutor::new(
            pool.clone(),
            quotes.clone(),
            account_repository,
            ledger_repository,
        )),
        quotes,
        pool,
        db_dir,
    }
}

pub fn register(engine: &TestEngine, name: &str) -> Account {
    engine
        .accounts
        .create_account(NewAccount {
            id: None,
            name: name.to_string(),
        })
        .expect("Failed to create account")
}
