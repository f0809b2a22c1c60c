//! Asset path mirroring and category sweeps.

mod mirror;
mod scan;
mod sweep;

pub use mirror::{AssetPath, Mirror};
pub use scan::scan_relative;
pub use sweep::sweep;
