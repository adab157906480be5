//! Account entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account identifier, generated at signup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(Uuid);

impl AccountId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an identifier from its string form
    pub fn parse(value: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(value)?))
    }

    /// Get the inner UUID value
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for AccountId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered account
///
/// Immutable once created: registration never updates an existing record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier for the account
    id: AccountId,
    /// Account holder's full name
    name: String,
    /// Email address, unique across accounts
    email: String,
    /// CPF as supplied at signup, formatting included
    cpf: String,
    /// Car plate, present for drivers
    #[serde(skip_serializing_if = "Option::is_none")]
    car_plate: Option<String>,
    /// Whether the account can request rides
    is_passenger: bool,
    /// Whether the account can accept rides
    is_driver: bool,
    /// Creation timestamp
    created_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account
    pub fn new(
        id: AccountId,
        name: impl Into<String>,
        email: impl Into<String>,
        cpf: impl Into<String>,
        car_plate: Option<String>,
        is_passenger: bool,
        is_driver: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            cpf: cpf.into(),
            car_plate,
            is_passenger,
            is_driver,
            created_at: Utc::now(),
        }
    }

    /// Override the creation timestamp, used when rehydrating from storage
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    // Getters

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn cpf(&self) -> &str {
        &self.cpf
    }

    pub fn car_plate(&self) -> Option<&str> {
        self.car_plate.as_deref()
    }

    pub fn is_passenger(&self) -> bool {
        self.is_passenger
    }

    pub fn is_driver(&self) -> bool {
        self.is_driver
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
