//! Account service for signup and lookup

use std::sync::Arc;

use tracing::info;

use crate::domain::account::{
    is_valid_cpf, validate_car_plate, validate_email, validate_name, Account, AccountId,
    AccountRepository, AccountValidationError,
};
use crate::domain::DomainError;

/// Request for registering a new account
#[derive(Debug, Clone)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub car_plate: Option<String>,
    pub is_passenger: bool,
    pub is_driver: bool,
}

/// Account service for registration and lookup
#[derive(Debug)]
pub struct AccountService<R: AccountRepository> {
    repository: Arc<R>,
}

impl<R: AccountRepository> AccountService<R> {
    /// Create a new account service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Register a new account
    ///
    /// Every check runs before the single insert, so a rejected signup
    /// leaves no partial state behind.
    pub async fn signup(&self, request: SignupRequest) -> Result<AccountId, DomainError> {
        if self.repository.email_exists(&request.email).await? {
            return Err(DomainError::conflict(format!(
                "Account with email '{}' already exists",
                request.email
            )));
        }

        validate_name(&request.name).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_email(&request.email).map_err(|e| DomainError::validation(e.to_string()))?;

        if !is_valid_cpf(&request.cpf) {
            return Err(DomainError::validation(
                AccountValidationError::InvalidCpf.to_string(),
            ));
        }

        // Plate is only required, and only checked, for drivers
        if request.is_driver {
            let car_plate = request.car_plate.as_deref().unwrap_or_default();
            validate_car_plate(car_plate).map_err(|e| DomainError::validation(e.to_string()))?;
        }

        let account = Account::new(
            AccountId::generate(),
            request.name,
            request.email,
            request.cpf,
            request.car_plate,
            request.is_passenger,
            request.is_driver,
        );

        let account = self.repository.create(account).await?;

        info!(account_id = %account.id(), "Account registered");

        Ok(account.id())
    }

    /// Get an account by its identifier
    pub async fn get(&self, id: &str) -> Result<Option<Account>, DomainError> {
        let account_id = AccountId::parse(id)
            .map_err(|e| DomainError::invalid_id(format!("Invalid account ID '{}': {}", id, e)))?;

        self.repository.get(&account_id).await
    }

    /// Get an account by its email address
    pub async fn get_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        self.repository.get_by_email(email).await
    }
}
