//! Script minification and bundling.

mod bundle;
mod minify;

pub use bundle::{bundle, script_paths};
pub use minify::{MinifyConfig, minify_js};
