//! Account domain
//!
//! Domain types for account registration: the account entity, the CPF and
//! field validation rules, and the repository trait.

mod entity;
mod repository;
mod validation;

pub use entity::{Account, AccountId};
pub use repository::AccountRepository;
pub use validation::{
    is_valid_cpf, validate_car_plate, validate_email, validate_name, AccountValidationError,
};

#[cfg(test)]
pub use repository::mock::MockAccountRepository;
