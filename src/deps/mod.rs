//! Data directory processing and dependency collection.

mod collect;
mod types;

pub use collect::collect_data;
pub use types::{BuildDeclarations, Dependencies};
