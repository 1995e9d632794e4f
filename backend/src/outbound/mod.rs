//! Driven adapters.
//!
//! - `memory`: process-local repositories used when no database is set.
//! - `persistence`: Diesel/PostgreSQL repositories.

pub mod memory;
pub mod persistence;
