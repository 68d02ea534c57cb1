//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the ranking domain.

mod direction;
mod errors;
mod ids;
mod timestamp;
mod weight;

pub use direction::Direction;
pub use errors::{ErrorCode, ValidationError};
pub use ids::AnalysisId;
pub use timestamp::Timestamp;
pub use weight::Weight;
