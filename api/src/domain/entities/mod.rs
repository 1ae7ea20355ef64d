//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod assignor;
pub mod payable;
pub mod payable_with_assignor;
pub mod user;

pub use assignor::{Assignor, AssignorId, NewAssignor};
pub use payable::{NewPayable, Payable, PayableId};
pub use payable_with_assignor::{AssignorSummary, PayableWithAssignor};
pub use user::{User, UserId};
