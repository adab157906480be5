//! Application state for shared services

use std::sync::Arc;

use crate::domain::account::{Account, AccountId, AccountRepository};
use crate::domain::DomainError;
use crate::infrastructure::account::{AccountService, SignupRequest};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<dyn AccountServiceTrait>,
}

impl AppState {
    pub fn new(account_service: Arc<dyn AccountServiceTrait>) -> Self {
        Self { account_service }
    }
}

/// Trait for account service operations
#[async_trait::async_trait]
pub trait AccountServiceTrait: Send + Sync {
    async fn signup(&self, request: SignupRequest) -> Result<AccountId, DomainError>;
    async fn get(&self, id: &str) -> Result<Option<Account>, DomainError>;
    async fn get_by_email(&self, email: &str) -> Result<Option<Account>, DomainError>;
}

#[async_trait::async_trait]
impl<R: AccountRepository + 'static> AccountServiceTrait for AccountService<R> {
    async fn signup(&self, request: SignupRequest) -> Result<AccountId, DomainError> {
        AccountService::signup(self, request).await
    }

    async fn get(&self, id: &str) -> Result<Option<Account>, DomainError> {
        AccountService::get(self, id).await
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        AccountService::get_by_email(self, email).await
    }
}
