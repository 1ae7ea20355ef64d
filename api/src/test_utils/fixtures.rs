//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::app::hash_password;
use crate::domain::entities::{
    Assignor, AssignorId, NewAssignor, Payable, PayableId, User, UserId,
};

/// Create a test assignor with default values
pub fn test_assignor() -> Assignor {
    Assignor {
        id: AssignorId(Uuid::new_v4()),
        document: "12345678900".to_string(),
        email: "a@b.com".to_string(),
        phone: "11999999999".to_string(),
        name: "Alice".to_string(),
    }
}

/// Create a valid assignor input with default values
pub fn test_assignor_input() -> NewAssignor {
    NewAssignor {
        document: "12345678900".to_string(),
        email: "a@b.com".to_string(),
        phone: "11999999999".to_string(),
        name: "Alice".to_string(),
    }
}

/// Create a test payable owned by the given assignor
pub fn test_payable(assignor_id: AssignorId) -> Payable {
    Payable {
        id: PayableId(Uuid::new_v4()),
        assignor_id,
        emission_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        value: 100.0,
    }
}

/// Create a test user with default values
pub fn test_user() -> User {
    test_user_with_password("alice", "s3cret-pass")
}

/// Create a test user whose stored hash matches the given password
pub fn test_user_with_password(login: &str, password: &str) -> User {
    let salt = format!("salt-{}", login);
    User {
        id: UserId(Uuid::new_v4()),
        login: login.to_string(),
        password_hash: hash_password(password, &salt),
        password_salt: salt,
        created_at: Utc::now(),
    }
}
