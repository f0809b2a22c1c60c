//! JavaScript minification with oxc.
//!
//! Packaged code is introspected at runtime (stack traces, constructor names
//! used for wiring), so the settings keep every function and class name and
//! never rename top-level bindings. Only local identifiers are shortened.

use std::path::Path;

use oxc::allocator::Allocator;
use oxc::codegen::{Codegen, CodegenOptions, CommentOptions};
use oxc::mangler::{MangleOptions, MangleOptionsKeepNames};
use oxc::minifier::{CompressOptions, CompressOptionsKeepNames, Minifier, MinifierOptions};
use oxc::parser::Parser;
use oxc::span::SourceType;

use crate::core::{PackError, PackResult};

/// Minifier settings. Built once per run and shared by every bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinifyConfig {
    /// Run the compressor (dead-code elimination, constant folding)
    pub compress: bool,
    pub drop_console: bool,
    pub drop_debugger: bool,
    pub keep_fnames: bool,
    pub keep_classnames: bool,
    /// Rename top-level bindings
    pub mangle_top_level: bool,
    /// Parse input as an ES module instead of a classic script
    pub module: bool,
}

impl MinifyConfig {
    /// The only configuration used for packaging.
    pub const PACKAGE: Self = Self {
        compress: true,
        drop_console: false,
        drop_debugger: false,
        keep_fnames: true,
        keep_classnames: true,
        mangle_top_level: false,
        module: false,
    };

    fn source_type(&self) -> SourceType {
        if self.module {
            SourceType::mjs()
        } else {
            SourceType::script()
        }
    }

    fn minifier_options(&self) -> MinifierOptions {
        let compress = self.compress.then(|| CompressOptions {
            drop_console: self.drop_console,
            drop_debugger: self.drop_debugger,
            keep_names: CompressOptionsKeepNames {
                function: self.keep_fnames,
                class: self.keep_classnames,
            },
            ..CompressOptions::smallest()
        });
        let mangle = MangleOptions {
            top_level: Some(self.mangle_top_level),
            keep_names: MangleOptionsKeepNames {
                function: self.keep_fnames,
                class: self.keep_classnames,
            },
            ..MangleOptions::default()
        };
        MinifierOptions {
            mangle: Some(mangle),
            compress,
        }
    }
}

/// Minify one script unit.
///
/// The result always ends with `;` so units can be concatenated without a
/// separator. `origin` only labels errors.
pub fn minify_js(source: &str, config: &MinifyConfig, origin: &Path) -> PackResult<String> {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source, config.source_type()).parse();
    if ret.panicked || !ret.errors.is_empty() {
        let mut errors: Vec<String> = ret.errors.iter().map(ToString::to_string).collect();
        if errors.is_empty() {
            errors.push("parser aborted".to_string());
        }
        return Err(PackError::Minify {
            path: origin.to_path_buf(),
            errors,
        });
    }

    let mut program = ret.program;
    let ret = Minifier::new(config.minifier_options()).minify(&allocator, &mut program);
    let code = Codegen::new()
        .with_options(CodegenOptions {
            minify: true,
            comments: CommentOptions::disabled(),
            ..CodegenOptions::default()
        })
        .with_scoping(ret.scoping)
        .build(&program)
        .code;

    Ok(terminate(code))
}

/// Trim trailing whitespace and make sure the unit ends with a statement terminator.
fn terminate(code: String) -> String {
    let mut code = code.trim_end().to_string();
    if !code.is_empty() && !code.ends_with(';') {
        code.push(';');
    }
    code
}
