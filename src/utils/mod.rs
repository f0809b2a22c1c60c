//! Utility modules shared by the packaging phases.

pub mod fs;
pub mod plural;

pub use plural::plural_count;
