//! Authentication
//!
//! JWT issuance/verification and the axum middleware guarding protected
//! routes.

pub mod jwt;
pub mod middleware;

pub use jwt::{Claims, JwtKeys};
pub use middleware::auth_middleware;
