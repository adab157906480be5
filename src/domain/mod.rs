//! Domain layer - Core business logic and entities

pub mod account;
pub mod error;

pub use account::{
    is_valid_cpf, validate_car_plate, validate_email, validate_name, Account, AccountId,
    AccountRepository, AccountValidationError,
};
pub use error::DomainError;
