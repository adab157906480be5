//! In-memory account repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::account::{Account, AccountId, AccountRepository};
use crate::domain::DomainError;

/// In-memory implementation of AccountRepository
#[derive(Debug)]
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<HashMap<Uuid, Account>>>,
    /// Index for email -> account ID lookup
    email_index: Arc<RwLock<HashMap<String, Uuid>>>,
}

impl InMemoryAccountRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
            email_index: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a repository with initial accounts
    pub fn with_accounts(accounts: Vec<Account>) -> Self {
        let mut accounts_map = HashMap::new();
        let mut email_map = HashMap::new();

        for account in accounts {
            let id = account.id().as_uuid();
            email_map.insert(account.email().to_string(), id);
            accounts_map.insert(id, account);
        }

        Self {
            accounts: Arc::new(RwLock::new(accounts_map)),
            email_index: Arc::new(RwLock::new(email_map)),
        }
    }
}

impl Default for InMemoryAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn get(&self, id: &AccountId) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(&id.as_uuid()).cloned())
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let email_index = self.email_index.read().await;

        if let Some(account_id) = email_index.get(email) {
            let accounts = self.accounts.read().await;
            return Ok(accounts.get(account_id).cloned());
        }

        Ok(None)
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;
        let mut email_index = self.email_index.write().await;

        let id = account.id().as_uuid();
        let email = account.email().to_string();

        if accounts.contains_key(&id) {
            return Err(DomainError::conflict(format!(
                "Account with ID '{}' already exists",
                account.id()
            )));
        }

        if email_index.contains_key(&email) {
            return Err(DomainError::conflict(format!(
                "Account with email '{}' already exists",
                email
            )));
        }

        email_index.insert(email, id);
        accounts.insert(id, account.clone());

        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_account(email: &str) -> Account {
        Account::new(
            AccountId::generate(),
            "John Doe",
            email,
            "52998224725",
            None,
            true,
            false,
        )
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryAccountRepository::new();
        let account = create_test_account("john.doe@gmail.com");

        repo.create(account.clone()).await.unwrap();

        let retrieved = repo.get(&account.id()).await.unwrap();
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap().email(), "john.doe@gmail.com");
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let repo = InMemoryAccountRepository::new();

        let retrieved = repo.get(&AccountId::generate()).await.unwrap();
        assert!(retrieved.is_none());
    }

    #[tokio::test]
    async fn test_get_by_email() {
        let repo = InMemoryAccountRepository::new();
        let account = create_test_account("john.doe@gmail.com");

        repo.create(account.clone()).await.unwrap();

        let retrieved = repo.get_by_email("john.doe@gmail.com").await.unwrap();
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap().id(), account.id());

        let missing = repo.get_by_email("other@gmail.com").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let repo = InMemoryAccountRepository::new();

        repo.create(create_test_account("john.doe@gmail.com"))
            .await
            .unwrap();

        let result = repo.create(create_test_account("john.doe@gmail.com")).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_with_accounts() {
        let account = create_test_account("john.doe@gmail.com");
        let repo = InMemoryAccountRepository::with_accounts(vec![account.clone()]);

        assert!(repo.email_exists("john.doe@gmail.com").await.unwrap());
        assert!(repo.get(&account.id()).await.unwrap().is_some());
    }
}
