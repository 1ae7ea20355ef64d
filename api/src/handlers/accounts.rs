//! Account handlers
//!
//! Public endpoints for user registration and authentication.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::AppState;

/// Request body for user registration
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub login: String,
    pub password: String,
}

/// Response body for user registration
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub id: String,
    pub login: String,
}

/// POST /integrations/user
///
/// Register a new user account.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, AppError> {
    let user = state
        .account_service
        .register(&request.login, &request.password)
        .await?;

    Ok(Json(RegisterResponse {
        id: user.id.to_string(),
        login: user.login,
    }))
}

/// Request body for authentication
#[derive(Debug, Deserialize)]
pub struct AuthenticateRequest {
    pub login: String,
    pub password: String,
}

/// Response body carrying the access token
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticateResponse {
    pub access_token: String,
    pub expires_in: i64,
}

/// POST /integrations/auth
///
/// Exchange a login/password pair for a bearer token.
pub async fn authenticate(
    State(state): State<AppState>,
    Json(request): Json<AuthenticateRequest>,
) -> Result<Json<AuthenticateResponse>, AppError> {
    let user = state
        .account_service
        .authenticate(&request.login, &request.password)
        .await?;

    let access_token = state.jwt.issue(&user)?;

    Ok(Json(AuthenticateResponse {
        access_token,
        expires_in: state.jwt.expiration_secs(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_register_request() {
        let json = r#"{"login": "alice", "password": "s3cret-pass"}"#;
        let request: RegisterRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.login, "alice");
    }

    #[test]
    fn parse_register_request_missing_password() {
        let json = r#"{"login": "alice"}"#;
        let result: Result<RegisterRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn serialize_authenticate_response() {
        let response = AuthenticateResponse {
            access_token: "token-abc".to_string(),
            expires_in: 3600,
        };

        let json = serde_json::to_string(&response).unwrap();

        assert!(json.contains("\"accessToken\":\"token-abc\""));
        assert!(json.contains("\"expiresIn\":3600"));
    }
}
