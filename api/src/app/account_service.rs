//! Account service
//!
//! Handles user registration and credential checks. Token issuance lives in
//! the `auth` module; this service only decides whether credentials are good.

use std::sync::Arc;

use chrono::Utc;
use rand::Rng;
use sha2::{Digest, Sha256};

use crate::domain::entities::{User, UserId};
use crate::domain::ports::UserRepository;
use crate::error::DomainError;

/// Service for managing user accounts
pub struct AccountService<UR>
where
    UR: UserRepository,
{
    users: Arc<UR>,
}

impl<UR> AccountService<UR>
where
    UR: UserRepository,
{
    pub fn new(users: Arc<UR>) -> Self {
        Self { users }
    }

    /// Register a new user
    pub async fn register(&self, login: &str, password: &str) -> Result<User, DomainError> {
        if login.is_empty() || login.len() > 50 {
            return Err(DomainError::Validation(
                "Login must be between 1 and 50 characters".to_string(),
            ));
        }

        if password.len() < 8 {
            return Err(DomainError::Validation(
                "Password must be at least 8 characters".to_string(),
            ));
        }

        if self.users.find_by_login(login).await?.is_some() {
            return Err(DomainError::AlreadyExists(format!(
                "User with login '{}' already exists",
                login
            )));
        }

        let salt = generate_salt();
        let user = User {
            id: UserId::new(),
            login: login.to_string(),
            password_hash: hash_password(password, &salt),
            password_salt: salt,
            created_at: Utc::now(),
        };

        self.users.create(&user).await?;

        Ok(user)
    }

    /// Check a login/password pair and return the matching user.
    ///
    /// Unknown logins and wrong passwords fail identically so the response
    /// does not reveal which half was wrong.
    pub async fn authenticate(&self, login: &str, password: &str) -> Result<User, DomainError> {
        let user = self
            .users
            .find_by_login(login)
            .await?
            .ok_or_else(|| DomainError::Unauthorized("Invalid credentials".to_string()))?;

        if hash_password(password, &user.password_salt) != user.password_hash {
            return Err(DomainError::Unauthorized("Invalid credentials".to_string()));
        }

        Ok(user)
    }

    /// Find a user by ID
    pub async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        self.users.find_by_id(id).await
    }
}

/// Generate a random per-user salt
fn generate_salt() -> String {
    let mut rng = rand::thread_rng();
    let bytes: Vec<u8> = (0..16).map(|_| rng.gen()).collect();
    hex::encode(bytes)
}

/// Hash a password with its salt for storage
pub fn hash_password(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}
