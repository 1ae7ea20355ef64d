//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod accounts;
pub mod assignors;
pub mod integrations;
pub mod payables;
pub mod presenters;

pub use accounts::{authenticate, register};
pub use assignors::{delete_assignor, edit_assignor, get_assignor};
pub use integrations::receive_payable_and_assignor;
pub use payables::{delete_payable, edit_payable, get_payable, get_payable_with_assignor};
