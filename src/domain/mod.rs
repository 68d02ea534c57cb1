//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `topsis` - Decision matrix, TOPSIS engine, step log, and ranking

pub mod foundation;
pub mod topsis;
