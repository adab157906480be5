//! Account repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{Account, AccountId};
use crate::domain::DomainError;

/// Repository trait for account storage
#[async_trait]
pub trait AccountRepository: Send + Sync + Debug {
    /// Get an account by its identifier
    async fn get(&self, id: &AccountId) -> Result<Option<Account>, DomainError>;

    /// Get an account by its email address
    async fn get_by_email(&self, email: &str) -> Result<Option<Account>, DomainError>;

    /// Persist a new account, rejecting duplicate emails
    async fn create(&self, account: Account) -> Result<Account, DomainError>;

    /// Check whether an email address is already registered
    async fn email_exists(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self.get_by_email(email).await?.is_some())
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;
    use uuid::Uuid;

    /// Mock account repository for testing
    #[derive(Debug, Default)]
    pub struct MockAccountRepository {
        accounts: Arc<RwLock<HashMap<Uuid, Account>>>,
        should_fail: Arc<RwLock<bool>>,
    }

    impl MockAccountRepository {
        /// Create a new mock repository
        pub fn new() -> Self {
            Self::default()
        }

        /// Set whether operations should fail
        pub async fn set_should_fail(&self, fail: bool) {
            *self.should_fail.write().await = fail;
        }

        async fn check_should_fail(&self) -> Result<(), DomainError> {
            if *self.should_fail.read().await {
                return Err(DomainError::storage("Mock repository configured to fail"));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl AccountRepository for MockAccountRepository {
        async fn get(&self, id: &AccountId) -> Result<Option<Account>, DomainError> {
            self.check_should_fail().await?;
            let accounts = self.accounts.read().await;
            Ok(accounts.get(&id.as_uuid()).cloned())
        }

        async fn get_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
            self.check_should_fail().await?;
            let accounts = self.accounts.read().await;
            Ok(accounts.values().find(|a| a.email() == email).cloned())
        }

        async fn create(&self, account: Account) -> Result<Account, DomainError> {
            self.check_should_fail().await?;
            let mut accounts = self.accounts.write().await;

            if accounts.values().any(|a| a.email() == account.email()) {
                return Err(DomainError::conflict(format!(
                    "Account with email '{}' already exists",
                    account.email()
                )));
            }

            accounts.insert(account.id().as_uuid(), account.clone());
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
            let repo = MockAccountRepository::new();
            let account = create_test_account("john.doe@gmail.com");

            repo.create(account.clone()).await.unwrap();

            let retrieved = repo.get(&account.id()).await.unwrap();
            assert!(retrieved.is_some());
            assert_eq!(retrieved.unwrap().email(), account.email());
        }

        #[tokio::test]
        async fn test_get_by_email() {
            let repo = MockAccountRepository::new();
            let account = create_test_account("john.doe@gmail.com");

            repo.create(account.clone()).await.unwrap();

            let retrieved = repo.get_by_email("john.doe@gmail.com").await.unwrap();
            assert!(retrieved.is_some());
            assert_eq!(retrieved.unwrap().id(), account.id());
        }

        #[tokio::test]
        async fn test_email_uniqueness() {
            let repo = MockAccountRepository::new();

            repo.create(create_test_account("john.doe@gmail.com"))
                .await
                .unwrap();

            let result = repo.create(create_test_account("john.doe@gmail.com")).await;
            assert!(result.is_err());
        }

        #[tokio::test]
        async fn test_email_exists() {
            let repo = MockAccountRepository::new();

            repo.create(create_test_account("john.doe@gmail.com"))
                .await
                .unwrap();

            assert!(repo.email_exists("john.doe@gmail.com").await.unwrap());
            assert!(!repo.email_exists("other@gmail.com").await.unwrap());
        }

        #[tokio::test]
        async fn test_configured_failure() {
            let repo = MockAccountRepository::new();
            repo.set_should_fail(true).await;

            let result = repo.get_by_email("john.doe@gmail.com").await;
            assert!(result.is_err());
        }
    }
}
