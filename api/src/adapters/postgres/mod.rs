//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod assignor_repo;
pub mod payable_repo;
pub mod user_repo;

pub use assignor_repo::PostgresAssignorRepository;
pub use payable_repo::PostgresPayableRepository;
pub use user_repo::PostgresUserRepository;
