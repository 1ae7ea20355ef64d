//! Test utilities
//!
//! Manual in-memory repository implementations and test fixtures for unit
//! testing.
//!
//! Why manual mocks instead of mockall?
//! - mockall has lifetime issues with traits containing `&str` parameters
//! - Manual mocks are more explicit and easier to debug
//! - We control exactly what they return without macro magic
//!
//! Note: For E2E tests over the HTTP layer, the AppState would need to be
//! made generic to support mock repositories. Currently, unit tests at the
//! service layer plus the flow tests in `integration_tests` provide the
//! coverage of the business logic.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
