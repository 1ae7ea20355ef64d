//! Access token issuance and verification (HS256)

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::User;
use crate::error::AppError;

/// Claims carried by an access token
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: Uuid,
    pub login: String,
    pub iat: i64,
    pub exp: i64,
}

/// Keys and validation settings for signing and checking tokens
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    expiration_secs: i64,
}

impl JwtKeys {
    pub fn new(secret: &str, expiration_secs: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(jsonwebtoken::Algorithm::HS256),
            expiration_secs,
        }
    }

    /// Issue an access token for a user
    pub fn issue(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user.id.0,
            login: user.login.clone(),
            iat: now,
            exp: now + self.expiration_secs,
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))
    }

    /// Decode and validate a bearer token
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| AppError::Unauthorized)
    }

    pub fn expiration_secs(&self) -> i64 {
        self.expiration_secs
    }
}
