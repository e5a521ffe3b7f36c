use super::{AccountStore, StoreError};
use crate::accounts::{Account, AccountStatus};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use sqlx::{
    Connection, Row,
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow},
};
use std::{str::FromStr, time::Duration};
use tracing::{Instrument, debug, info_span, instrument};

const SCHEMA_SQL: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/sql/schema.sql"));

/// Accounts persisted in SQLite through a `sqlx` pool.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open the pool for `dsn` and apply the schema.
    ///
    /// # Errors
    /// Returns an error if the DSN is invalid, the database cannot be opened
    /// or the schema cannot be applied.
    pub async fn connect(dsn: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(dsn)?;

        let pool = if is_in_memory(dsn) {
            // An in-memory database dies with its last connection.
            SqlitePoolOptions::new()
                .min_connections(1)
                .max_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new()
                .min_connections(1)
                .max_connections(5)
                .test_before_acquire(true)
                .connect_with(options)
                .await?
        };

        let store = Self::from_pool(pool);
        store.migrate().await?;

        Ok(store)
    }

    #[must_use]
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the `accounts` table if missing.
    ///
    /// # Errors
    /// Returns an error if the statement fails.
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::query(SCHEMA_SQL).execute(&self.pool).await?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn is_in_memory(dsn: &str) -> bool {
    dsn.contains(":memory:") || dsn.contains("mode=memory")
}

fn account_from_row(row: &SqliteRow) -> Result<Account, sqlx::Error> {
    let age: i64 = row.try_get("age")?;
    let status: String = row.try_get("status")?;
    let password: String = row.try_get("password")?;

    Ok(Account {
        username: row.try_get("username")?,
        password: SecretString::from(password),
        name: row.try_get("name")?,
        surname: row.try_get("surname")?,
        age: u8::try_from(age).map_err(|e| sqlx::Error::Decode(Box::new(e)))?,
        status: AccountStatus::from_str(&status).map_err(|e| sqlx::Error::Decode(Box::new(e)))?,
    })
}

#[async_trait]
impl AccountStore for SqliteStore {
    #[instrument(skip(self, account), fields(username = %account.username))]
    async fn create(&self, account: Account) -> Result<(), StoreError> {
        let query = "INSERT INTO accounts (name, surname, age, username, password, status) VALUES (?, ?, ?, ?, ?, ?)";
        let span = info_span!(
            "db.query",
            db.system = "sqlite",
            db.operation = "INSERT",
            db.statement = query
        );
        let result = sqlx::query(query)
            .bind(&account.name)
            .bind(&account.surname)
            .bind(i64::from(account.age))
            .bind(&account.username)
            .bind(account.password.expose_secret())
            .bind(AccountStatus::InProgress.as_str())
            .execute(&self.pool)
            .instrument(span)
            .await;

        match result {
            Ok(_) => {
                debug!("account stored");
                Ok(())
            }
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(StoreError::DuplicateUsername(account.username))
            }
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, StoreError> {
        let query =
            "SELECT name, surname, age, username, password, status FROM accounts WHERE username = ?";
        let span = info_span!(
            "db.query",
            db.system = "sqlite",
            db.operation = "SELECT",
            db.statement = query
        );
        let row = sqlx::query(query)
            .bind(username)
            .fetch_optional(&self.pool)
            .instrument(span)
            .await?;

        Ok(row.as_ref().map(account_from_row).transpose()?)
    }

    #[instrument(skip(self))]
    async fn activate(&self, username: &str) -> Result<(), StoreError> {
        let query = "UPDATE accounts SET status = ? WHERE username = ?";
        let span = info_span!(
            "db.query",
            db.system = "sqlite",
            db.operation = "UPDATE",
            db.statement = query
        );
        let result = sqlx::query(query)
            .bind(AccountStatus::Active.as_str())
            .bind(username)
            .execute(&self.pool)
            .instrument(span)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(username.to_string()));
        }

        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let acquire_span = info_span!("db.acquire", db.system = "sqlite", db.operation = "ACQUIRE");
        let mut conn = self.pool.acquire().instrument(acquire_span).await?;

        let ping_span = info_span!("db.ping", db.system = "sqlite", db.operation = "PING");
        conn.ping().instrument(ping_span).await?;

        Ok(())
    }
}
