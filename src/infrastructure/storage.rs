//! Storage backend selection

/// Available storage backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    Postgres,
    InMemory,
}

impl StorageType {
    /// Parse a backend name from configuration
    pub fn from_str(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "postgres" | "postgresql" => Some(Self::Postgres),
            "memory" | "in_memory" | "in-memory" => Some(Self::InMemory),
            _ => None,
        }
    }
}
