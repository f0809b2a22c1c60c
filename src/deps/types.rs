//! Dependency declarations and the per-run accumulator.

use serde::Deserialize;

use crate::config::Profile;

/// A `scripts` entry: a bare name or a record whose `src` is the name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ScriptRef {
    Name(String),
    Entry { src: String },
}

impl ScriptRef {
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) | Self::Entry { src: name } => name,
        }
    }
}

/// Contents of the declarations file (`data/build.json`).
///
/// Missing sequences are treated as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BuildDeclarations {
    pub libs: Vec<String>,
    pub scripts: Vec<ScriptRef>,
    pub shaders: Vec<String>,
}

/// Libraries, scripts and shaders required by this build, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dependencies {
    pub libs: Vec<String>,
    pub scripts: Vec<String>,
    pub shaders: Vec<String>,
}

impl Dependencies {
    /// Start from the built-in entries of `profile`.
    pub fn seeded(profile: Profile) -> Self {
        Self {
            libs: profile.seed_libs().iter().map(|s| s.to_string()).collect(),
            scripts: Vec::new(),
            shaders: profile.seed_shaders().iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Append declared entries after the existing ones.
    pub fn extend(&mut self, declarations: BuildDeclarations) {
        self.libs.extend(declarations.libs);
        self.scripts
            .extend(declarations.scripts.iter().map(|s| s.name().to_string()));
        self.shaders.extend(declarations.shaders);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_script_ref_forms() {
        let decl: BuildDeclarations = serde_json::from_value(json!({
            "scripts": ["a", { "src": "ui/menu", "defer": true }]
        }))
        .unwrap();
        let names: Vec<_> = decl.scripts.iter().map(ScriptRef::name).collect();
        assert_eq!(names, vec!["a", "ui/menu"]);
        assert!(decl.libs.is_empty());
        assert!(decl.shaders.is_empty());
    }

    #[test]
    fn test_record_without_src_is_rejected() {
        let result: Result<BuildDeclarations, _> =
            serde_json::from_value(json!({ "scripts": [{ "path": "a" }] }));
        assert!(result.is_err());
    }

    #[test]
    fn test_seeded_then_extended() {
        let mut deps = Dependencies::seeded(Profile::Mobile);
        deps.extend(BuildDeclarations {
            libs: vec!["Physics".into()],
            scripts: vec![ScriptRef::Name("a".into())],
            shaders: vec!["blur".into()],
        });
        assert_eq!(deps.libs, vec!["BlankEngine.Core", "Physics"]);
        assert_eq!(deps.scripts, vec!["a"]);
        assert_eq!(deps.shaders, vec!["vertex", "fragment", "blur"]);
    }
}
