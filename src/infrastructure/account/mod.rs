//! Account infrastructure module
//!
//! Storage implementations for accounts (in-memory and PostgreSQL) and the
//! service that runs the registration flow on top of them.

mod postgres_repository;
mod repository;
mod service;

pub use postgres_repository::PostgresAccountRepository;
pub use repository::InMemoryAccountRepository;
pub use service::{AccountService, SignupRequest};
