//! Core types - pure abstractions shared across the codebase.

mod category;
mod error;

pub use category::{Category, Separator};
pub use error::{PackError, PackResult};
