//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports, and return typed
//! `DomainError` failures for expected business-rule outcomes.

pub mod account_service;
pub mod assignor_service;
pub mod payable_service;

pub use account_service::{hash_password, AccountService};
pub use assignor_service::AssignorService;
pub use payable_service::PayableService;
