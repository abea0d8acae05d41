use std::ops::{Deref, DerefMut};

use error_stack::Report;
use sqlx::migrate::Migrator;
use sqlx::{Error, PgConnection, Pool, Postgres};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{DependOnBookQuery, DependOnClientQuery};
use kernel::interface::update::{DependOnBookModifier, DependOnClientModifier};
use kernel::KernelError;

use crate::env;
use crate::error::ConvertError;

pub use self::{book::*, client::*};

mod book;
mod client;

const POSTGRES_URL: &str = "POSTGRES_URL";

/// SQLSTATE codes for `serialization_failure` and `deadlock_detected`.
const RETRYABLE_STATES: [&str; 2] = ["40001", "40P01"];

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

#[derive(Clone)]
pub struct PostgresDatabase {
    pool: Pool<Postgres>,
}

impl PostgresDatabase {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        let url = env(POSTGRES_URL)?;
        let pool = Pool::connect(&url).await.convert_error()?;
        Ok(Self { pool })
    }

    /// Applies every pending migration embedded from `driver/migrations`.
    pub async fn migrate(&self) -> error_stack::Result<(), KernelError> {
        tracing::info!("Checking for pending migrations");
        MIGRATOR.run(&self.pool).await.convert_error()?;
        tracing::info!("All migrations applied");
        Ok(())
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for PostgresDatabase {
    type Transaction = PostgresTransaction;
    async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
        let transaction = self.pool.begin().await.convert_error()?;
        Ok(PostgresTransaction(transaction))
    }
}

/// Open database transaction. Dropped without a commit it rolls back.
pub struct PostgresTransaction(sqlx::Transaction<'static, Postgres>);

#[async_trait::async_trait]
impl Transaction for PostgresTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        self.0.commit().await.convert_error()
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        self.0.rollback().await.convert_error()
    }
}

impl Deref for PostgresTransaction {
    type Target = PgConnection;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for PostgresTransaction {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl DependOnBookQuery for PostgresDatabase {
    type BookQuery = PostgresBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &PostgresBookRepository
    }
}

impl DependOnBookModifier for PostgresDatabase {
    type BookModifier = PostgresBookRepository;
    fn book_modifier(&self) -> &Self::BookModifier {
        &PostgresBookRepository
    }
}

impl DependOnClientQuery for PostgresDatabase {
    type ClientQuery = PostgresClientRepository;
    fn client_query(&self) -> &Self::ClientQuery {
        &PostgresClientRepository
    }
}

impl DependOnClientModifier for PostgresDatabase {
    type ClientModifier = PostgresClientRepository;
    fn client_modifier(&self) -> &Self::ClientModifier {
        &PostgresClientRepository
    }
}

impl<T> ConvertError for Result<T, Error> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| {
            let kind = match &error {
                Error::PoolTimedOut => KernelError::Timeout,
                Error::Database(database)
                    if database
                        .code()
                        .is_some_and(|code| RETRYABLE_STATES.contains(&code.as_ref())) =>
                {
                    KernelError::Concurrency
                }
                _ => KernelError::Internal,
            };
            Report::new(error).change_context(kind)
        })
    }
}
