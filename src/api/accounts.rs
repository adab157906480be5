//! Account registration and lookup endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::account::Account;
use crate::infrastructure::account::SignupRequest;

/// Request to register a new account
#[derive(Debug, Clone, Deserialize)]
pub struct SignupApiRequest {
    pub name: String,
    pub email: String,
    pub cpf: String,
    #[serde(default)]
    pub car_plate: Option<String>,
    #[serde(default)]
    pub is_passenger: bool,
    #[serde(default)]
    pub is_driver: bool,
}

/// Successful signup response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupResponse {
    pub account_id: String,
}

/// Account representation for the API
#[derive(Debug, Clone, Serialize)]
pub struct AccountResponse {
    pub account_id: String,
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub car_plate: Option<String>,
    pub is_passenger: bool,
    pub is_driver: bool,
    pub created_at: String,
}

impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        Self {
            account_id: account.id().to_string(),
            name: account.name().to_string(),
            email: account.email().to_string(),
            cpf: account.cpf().to_string(),
            car_plate: account.car_plate().map(String::from),
            is_passenger: account.is_passenger(),
            is_driver: account.is_driver(),
            created_at: account.created_at().to_rfc3339(),
        }
    }
}

/// POST /signup
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupApiRequest>,
) -> Result<Json<SignupResponse>, ApiError> {
    debug!(email = %request.email, "Registering new account");

    let service_request = SignupRequest {
        name: request.name,
        email: request.email,
        cpf: request.cpf,
        car_plate: request.car_plate,
        is_passenger: request.is_passenger,
        is_driver: request.is_driver,
    };

    let account_id = state
        .account_service
        .signup(service_request)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(SignupResponse {
        account_id: account_id.to_string(),
    }))
}

/// GET /accounts/{account_id}
pub async fn get_account(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
) -> Result<Json<AccountResponse>, ApiError> {
    debug!(account_id = %account_id, "Fetching account");

    let account = state
        .account_service
        .get(&account_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::not_found(format!("Account '{}' not found", account_id)))?;

    Ok(Json(AccountResponse::from(&account)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::AccountId;

    #[test]
    fn test_signup_request_booleans_default_to_false() {
        let json = r#"{"name": "John Doe", "email": "john.doe@gmail.com", "cpf": "52998224725"}"#;
        let request: SignupApiRequest = serde_json::from_str(json).unwrap();

        assert!(!request.is_passenger);
        assert!(!request.is_driver);
        assert!(request.car_plate.is_none());
    }

    #[test]
    fn test_signup_request_full() {
        let json = r#"{
            "name": "Jane Doe",
            "email": "jane.doe@gmail.com",
            "cpf": "97456321558",
            "car_plate": "ABC1234",
            "is_driver": true
        }"#;
        let request: SignupApiRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.car_plate.as_deref(), Some("ABC1234"));
        assert!(request.is_driver);
        assert!(!request.is_passenger);
    }

    #[test]
    fn test_signup_request_missing_field_is_rejected() {
        let json = r#"{"name": "John Doe", "email": "john.doe@gmail.com"}"#;
        let result: Result<SignupApiRequest, _> = serde_json::from_str(json);

        assert!(result.is_err());
    }

    #[test]
    fn test_account_response_from_entity() {
        let account = Account::new(
            AccountId::generate(),
            "Jane Doe",
            "jane.doe@gmail.com",
            "97456321558",
            Some("ABC1234".to_string()),
            false,
            true,
        );

        let response = AccountResponse::from(&account);

        assert_eq!(response.account_id, account.id().to_string());
        assert_eq!(response.email, "jane.doe@gmail.com");
        assert_eq!(response.car_plate.as_deref(), Some("ABC1234"));
        assert!(response.is_driver);
    }

    #[test]
    fn test_signup_response_serialization() {
        let response = SignupResponse {
            account_id: "9aefcb6e-81b8-4326-9fcb-30c6a8b1f6b5".to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("account_id"));
        assert!(json.contains("9aefcb6e"));
    }
}
