//! SeaORM entities
//!
//! Database models backing the repository adapters. Kept apart from the
//! domain entities in `domain::entities`; the adapters convert between the
//! two.

pub mod assignors;
pub mod payables;
pub mod users;
