//! PostgreSQL account repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::account::{Account, AccountId, AccountRepository};
use crate::domain::DomainError;

/// PostgreSQL implementation of AccountRepository
///
/// Holds a long-lived connection pool injected at construction; every
/// query acquires and releases a connection through it.
#[derive(Debug, Clone)]
pub struct PostgresAccountRepository {
    pool: PgPool,
}

impl PostgresAccountRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn get(&self, id: &AccountId) -> Result<Option<Account>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT account_id, name, email, cpf, car_plate, is_passenger, is_driver, created_at
            FROM account
            WHERE account_id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get account: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_account(&row))),
            None => Ok(None),
        }
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT account_id, name, email, cpf, car_plate, is_passenger, is_driver, created_at
            FROM account
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get account by email: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_account(&row))),
            None => Ok(None),
        }
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO account (account_id, name, email, cpf, car_plate, is_passenger,
                                 is_driver, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(account.id().as_uuid())
        .bind(account.name())
        .bind(account.email())
        .bind(account.cpf())
        .bind(account.car_plate())
        .bind(account.is_passenger())
        .bind(account.is_driver())
        .bind(account.created_at())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let msg = e.to_string();

            if msg.contains("duplicate key") || msg.contains("unique constraint") {
                DomainError::conflict(format!(
                    "Account with email '{}' already exists",
                    account.email()
                ))
            } else {
                DomainError::storage(format!("Failed to create account: {}", e))
            }
        })?;

        Ok(account)
    }
}

fn row_to_account(row: &sqlx::postgres::PgRow) -> Account {
    let account_id: Uuid = row.get("account_id");
    let name: String = row.get("name");
    let email: String = row.get("email");
    let cpf: String = row.get("cpf");
    let car_plate: Option<String> = row.get("car_plate");
    let is_passenger: bool = row.get("is_passenger");
    let is_driver: bool = row.get("is_driver");
    let created_at: chrono::DateTime<chrono::Utc> = row.get("created_at");

    Account::new(
        AccountId::from(account_id),
        name,
        email,
        cpf,
        car_plate,
        is_passenger,
        is_driver,
    )
    .with_created_at(created_at)
}
