//! Stripping default-valued window fields from the project manifest.
//!
//! The runtime applies these same defaults when a field is missing, so the
//! table below must match its defaults exactly. `null` always counts as the
//! default; fields missing from the input are never added.
//!
//! | field            | default      |
//! |------------------|--------------|
//! | `title`          | `"Untitled"` |
//! | `width`          | `250`        |
//! | `height`         | `250`        |
//! | `windowWidth`    | `0`          |
//! | `windowHeight`   | `0`          |
//! | `marginWidth`    | `0`          |
//! | `marginHeight`   | `0`          |
//! | `resizable`      | `true`       |
//! | full-screen flag | any falsy    |
//! | `fillWindow`     | `true`       |

use serde_json::Value as JsonValue;

use crate::config::Profile;

/// Default literal of a window field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    Str(&'static str),
    Num(f64),
    Bool(bool),
}

impl Literal {
    fn matches(self, value: &JsonValue) -> bool {
        match (self, value) {
            (Self::Str(s), JsonValue::String(v)) => v == s,
            (Self::Num(n), JsonValue::Number(v)) => v.as_f64() == Some(n),
            (Self::Bool(b), JsonValue::Bool(v)) => *v == b,
            _ => false,
        }
    }
}

/// How a field is compared against its default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultRule {
    /// Stripped when null or equal to the literal
    Equals(Literal),
    /// Stripped when falsy (`null`, `false`, `0`, `""`)
    Falsy,
}

impl DefaultRule {
    pub fn is_default(self, value: &JsonValue) -> bool {
        match self {
            Self::Equals(literal) => value.is_null() || literal.matches(value),
            Self::Falsy => is_falsy(value),
        }
    }
}

/// One row of the default table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowField {
    pub key: &'static str,
    pub rule: DefaultRule,
}

const fn field(key: &'static str, literal: Literal) -> WindowField {
    WindowField {
        key,
        rule: DefaultRule::Equals(literal),
    }
}

/// Fields shared by every profile. The full-screen flag is appended per profile.
const COMMON_FIELDS: &[WindowField] = &[
    field("title", Literal::Str("Untitled")),
    field("width", Literal::Num(250.0)),
    field("height", Literal::Num(250.0)),
    field("windowWidth", Literal::Num(0.0)),
    field("windowHeight", Literal::Num(0.0)),
    field("marginWidth", Literal::Num(0.0)),
    field("marginHeight", Literal::Num(0.0)),
    field("resizable", Literal::Bool(true)),
    field("fillWindow", Literal::Bool(true)),
];

/// The default table for `profile`.
pub fn window_fields(profile: Profile) -> Vec<WindowField> {
    let mut fields = COMMON_FIELDS.to_vec();
    fields.push(WindowField {
        key: profile.fullscreen_key(),
        rule: DefaultRule::Falsy,
    });
    fields
}

fn is_falsy(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => true,
        JsonValue::Bool(b) => !b,
        JsonValue::Number(n) => n.as_f64().is_none_or(|f| f == 0.0 || f.is_nan()),
        JsonValue::String(s) => s.is_empty(),
        JsonValue::Array(_) | JsonValue::Object(_) => false,
    }
}

/// Remove default-valued fields from `manifest.window`. Returns the stripped keys.
///
/// A manifest without a `window` object is left untouched.
pub fn normalize(manifest: &mut JsonValue, fields: &[WindowField]) -> Vec<&'static str> {
    let Some(window) = manifest.get_mut("window").and_then(JsonValue::as_object_mut) else {
        return Vec::new();
    };

    let mut stripped = Vec::new();
    for field in fields {
        if window.get(field.key).is_some_and(|v| field.rule.is_default(v)) {
            window.shift_remove(field.key);
            stripped.push(field.key);
        }
    }
    stripped
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn desktop() -> Vec<WindowField> {
        window_fields(Profile::Desktop)
    }

    #[test]
    fn test_strip_all_defaults() {
        let mut manifest = json!({
            "name": "game",
            "window": {
                "title": "Untitled",
                "width": 250,
                "height": 250.0,
                "windowWidth": 0,
                "windowHeight": null,
                "marginWidth": 0,
                "marginHeight": 0,
                "resizable": true,
                "fullScreen": false,
                "fillWindow": true
            }
        });
        let stripped = normalize(&mut manifest, &desktop());
        assert_eq!(stripped.len(), 10);
        assert_eq!(manifest, json!({ "name": "game", "window": {} }));
    }

    #[test]
    fn test_keep_non_defaults() {
        let original = json!({
            "window": {
                "title": "Space Run",
                "width": 800,
                "height": 600,
                "marginWidth": 12,
                "resizable": false,
                "fullScreen": true,
                "fillWindow": false,
                "icon": "icon/app.png"
            },
            "version": "1.2.0"
        });
        let mut manifest = original.clone();
        assert!(normalize(&mut manifest, &desktop()).is_empty());
        assert_eq!(manifest, original);
    }

    #[test]
    fn test_never_synthesizes_fields() {
        let mut manifest = json!({ "window": { "width": 640 } });
        normalize(&mut manifest, &desktop());
        assert_eq!(manifest, json!({ "window": { "width": 640 } }));
    }

    #[test]
    fn test_idempotent() {
        let mut manifest = json!({
            "window": { "title": "Untitled", "width": 300, "fullScreen": 0, "resizable": false }
        });
        normalize(&mut manifest, &desktop());
        let once = manifest.clone();
        assert!(normalize(&mut manifest, &desktop()).is_empty());
        assert_eq!(manifest, once);
    }

    #[test]
    fn test_fullscreen_key_follows_profile() {
        let mut manifest = json!({ "window": { "fullScreen": false, "fullscreen": false } });
        normalize(&mut manifest, &window_fields(Profile::Mobile));
        assert_eq!(manifest, json!({ "window": { "fullScreen": false } }));
    }

    #[test]
    fn test_falsy_values() {
        for value in [json!(null), json!(false), json!(0), json!(""), json!(0.0)] {
            assert!(DefaultRule::Falsy.is_default(&value), "{value}");
        }
        for value in [json!(true), json!(1), json!("yes"), json!([]), json!({})] {
            assert!(!DefaultRule::Falsy.is_default(&value), "{value}");
        }
    }

    #[test]
    fn test_type_mismatch_is_not_default() {
        let mut manifest = json!({ "window": { "width": "250", "resizable": 1 } });
        assert!(normalize(&mut manifest, &desktop()).is_empty());
    }

    #[test]
    fn test_missing_window_untouched() {
        let mut manifest = json!({ "name": "headless" });
        assert!(normalize(&mut manifest, &desktop()).is_empty());
        assert_eq!(manifest, json!({ "name": "headless" }));
    }

    #[test]
    fn test_preserves_key_order() {
        let mut manifest = json!({ "window": { "b": 1, "title": "Untitled", "a": 2 } });
        normalize(&mut manifest, &desktop());
        let keys: Vec<_> = manifest["window"].as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["b", "a"]);
    }
}
