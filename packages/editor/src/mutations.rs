//! # Path Mutations
//!
//! A single update operation addresses any field of the settings document by
//! a dotted path, e.g. `gradient.colors.1` or `wordStyling.2.highlight`.
//!
//! ## Semantics
//!
//! - **Immutable**: the input document is never touched. Only the containers
//!   on the path are copied; every other branch keeps its `Arc` identity.
//! - **Typed**: a value must deserialize into the field it lands in, or the
//!   update is rejected and nothing changes. Writing a whole container
//!   (`effects`, `gradient`, `wordStyling.2`) requires every modelled field,
//!   non-null, so the stored object reads back exactly as written.
//! - **Permissive**: keys the document does not model are stored verbatim,
//!   creating intermediate containers as needed. Word-styling entries are
//!   created on first write.
//! - **Extending indices**: writing past the end of the color list extends
//!   it, padding gaps with the default new color. Unlike the otherwise
//!   permissive contract, indices above [`MAX_ARRAY_INDEX`] are rejected so
//!   a stray path cannot allocate an unbounded list.
//! - **Canonical word indices**: `wordStyling.01` is rejected; keys must
//!   read back under the same spelling.
//! - **Removal**: [`Assignment::Remove`] deletes map entries and array
//!   elements and resets typed fields to their defaults.

use headline_model::{
    Effect, EffectSettings, Extra, FontWeight, GradientDirection, GradientSettings,
    HeadlineSettings, WordFlag, WordStyle, WordStyling, DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE,
    DEFAULT_TEXT, NEW_GRADIENT_COLOR,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Largest array index a path may address
pub const MAX_ARRAY_INDEX: usize = 1024;

/// Value written by an update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Assignment {
    Set(Value),
    /// Delete the addressed entry, or reset a typed field to its default
    Remove,
}

impl From<Value> for Assignment {
    fn from(value: Value) -> Self {
        Assignment::Set(value)
    }
}

macro_rules! assignment_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Assignment {
                fn from(value: $ty) -> Self {
                    Assignment::Set(Value::from(value))
                }
            }
        )*
    };
}

assignment_from!(bool, &str, String, u32, u64, i64, usize, Vec<String>, Vec<&str>);

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("Invalid value for '{path}': {reason}")]
    InvalidValue { path: String, reason: String },

    #[error("Path '{path}' descends into a value that has no fields")]
    NotAContainer { path: String },
}

pub type MutationResult<T> = Result<T, MutationError>;

/// Path-addressed access to a settings document
pub trait PathMutator: Sized {
    /// Return a new document with `value` written at `path`
    fn update(&self, path: &str, value: impl Into<Assignment>) -> MutationResult<Self>;

    /// Read the JSON value at `path`, if present
    fn read(&self, path: &str) -> Option<Value>;
}

impl PathMutator for HeadlineSettings {
    fn update(&self, path: &str, value: impl Into<Assignment>) -> MutationResult<Self> {
        update(self, path, value)
    }

    fn read(&self, path: &str) -> Option<Value> {
        read(self, path)
    }
}

/// Write `value` at `path`, returning the new document
pub fn update(
    doc: &HeadlineSettings,
    path: &str,
    value: impl Into<Assignment>,
) -> MutationResult<HeadlineSettings> {
    let assignment = value.into();
    let keys = split_path(path)?;
    let target = Target {
        path,
        assignment: &assignment,
    };

    let mut next = doc.clone();
    match keys.as_slice() {
        ["text"] => next.text = target.scalar(|| DEFAULT_TEXT.to_string())?,
        ["fontSize"] => next.font_size = target.scalar(|| DEFAULT_FONT_SIZE)?,
        ["fontFamily"] => next.font_family = target.scalar(|| DEFAULT_FONT_FAMILY.to_string())?,
        ["fontWeight"] => next.font_weight = target.scalar(FontWeight::default)?,
        ["text" | "fontSize" | "fontFamily" | "fontWeight", ..] => {
            return Err(target.not_a_container())
        }
        ["gradient", rest @ ..] => {
            next.gradient = Arc::new(update_gradient(&doc.gradient, rest, &target)?)
        }
        ["effects", rest @ ..] => {
            next.effects = Arc::new(update_effects(&doc.effects, rest, &target)?)
        }
        ["wordStyling", rest @ ..] => {
            next.word_styling = Arc::new(update_word_styling(&doc.word_styling, rest, &target)?)
        }
        rest => assign_extra(&mut next.extra, rest, &target)?,
    }

    debug!(path, "Applied settings update");
    Ok(next)
}

/// Read the JSON value at `path`
pub fn read(doc: &HeadlineSettings, path: &str) -> Option<Value> {
    let keys = split_path(path).ok()?;
    let mut node = serde_json::to_value(doc).ok()?;

    for key in keys {
        node = match node {
            Value::Object(mut fields) => fields.remove(key)?,
            Value::Array(items) => items.into_iter().nth(key.parse().ok()?)?,
            _ => return None,
        };
    }

    Some(node)
}

fn split_path(path: &str) -> MutationResult<Vec<&str>> {
    let keys: Vec<&str> = path.split('.').collect();
    if keys.iter().any(|key| key.is_empty()) {
        return Err(MutationError::InvalidPath {
            path: path.to_string(),
            reason: "empty path segment".to_string(),
        });
    }
    Ok(keys)
}

/// The write being applied, carried down the walk
struct Target<'a> {
    path: &'a str,
    assignment: &'a Assignment,
}

impl Target<'_> {
    /// Decode the assigned value, or produce the default on removal
    fn scalar<T: DeserializeOwned>(&self, default: impl FnOnce() -> T) -> MutationResult<T> {
        match self.assignment {
            Assignment::Set(value) => self.decode(value),
            Assignment::Remove => Ok(default()),
        }
    }

    fn decode<T: DeserializeOwned>(&self, value: &Value) -> MutationResult<T> {
        T::deserialize(value).map_err(|e| self.invalid_value(e.to_string()))
    }

    /// Decode a whole typed container, or produce the default on removal
    ///
    /// The object must carry every `required` field and no null modelled
    /// field, otherwise serde defaults would fill the gaps.
    fn container<T: DeserializeOwned>(
        &self,
        required: &[&str],
        optional: &[&str],
        default: impl FnOnce() -> T,
    ) -> MutationResult<T> {
        match self.assignment {
            Assignment::Set(value) => {
                self.check_fields(value, required, optional)?;
                self.decode(value)
            }
            Assignment::Remove => Ok(default()),
        }
    }

    fn check_fields(
        &self,
        value: &Value,
        required: &[&str],
        optional: &[&str],
    ) -> MutationResult<()> {
        let Value::Object(fields) = value else {
            return Err(self.invalid_value("expected an object".to_string()));
        };

        for key in required {
            match fields.get(*key) {
                None => return Err(self.invalid_value(format!("missing field '{}'", key))),
                Some(Value::Null) => {
                    return Err(self.invalid_value(format!("field '{}' is null", key)))
                }
                Some(_) => {}
            }
        }
        for key in optional {
            if let Some(Value::Null) = fields.get(*key) {
                return Err(self.invalid_value(format!("field '{}' is null", key)));
            }
        }
        Ok(())
    }

    fn check_word(&self, value: &Value) -> MutationResult<()> {
        self.check_fields(value, &WordFlag::ALL.map(WordFlag::key), &["color"])
    }

    fn word_index(&self, key: &str) -> MutationResult<usize> {
        match key.parse::<usize>() {
            Ok(index) if index.to_string() == key => Ok(index),
            _ => Err(self.invalid_path(format!("'{}' is not a word index", key))),
        }
    }

    fn invalid_value(&self, reason: String) -> MutationError {
        MutationError::InvalidValue {
            path: self.path.to_string(),
            reason,
        }
    }

    fn not_a_container(&self) -> MutationError {
        MutationError::NotAContainer {
            path: self.path.to_string(),
        }
    }

    fn invalid_path(&self, reason: String) -> MutationError {
        MutationError::InvalidPath {
            path: self.path.to_string(),
            reason,
        }
    }

    fn index(&self, key: &str) -> MutationResult<usize> {
        let index: usize = key
            .parse()
            .map_err(|_| self.invalid_path(format!("'{}' is not an array index", key)))?;
        if index > MAX_ARRAY_INDEX {
            return Err(self.invalid_path(format!(
                "index {} exceeds the maximum of {}",
                index, MAX_ARRAY_INDEX
            )));
        }
        Ok(index)
    }
}

fn update_gradient(
    current: &GradientSettings,
    keys: &[&str],
    target: &Target,
) -> MutationResult<GradientSettings> {
    if keys.is_empty() {
        let required = ["enabled", "direction", "colors"];
        return target.container(&required, &[], GradientSettings::default);
    }

    let mut next = current.clone();
    match keys {
        ["enabled"] => next.enabled = target.scalar(|| GradientSettings::default().enabled)?,
        ["direction"] => next.direction = target.scalar(GradientDirection::default)?,
        ["colors"] => next.colors = target.scalar(|| GradientSettings::default().colors)?,
        ["colors", key] => write_color(&mut next.colors, key, target)?,
        ["enabled" | "direction", ..] | ["colors", _, ..] => return Err(target.not_a_container()),
        rest => assign_extra(&mut next.extra, rest, target)?,
    }
    Ok(next)
}

fn write_color(colors: &mut Vec<String>, key: &str, target: &Target) -> MutationResult<()> {
    let index = target.index(key)?;
    match target.assignment {
        Assignment::Set(value) => {
            let color: String = target.decode(value)?;
            if index >= colors.len() {
                colors.resize(index + 1, NEW_GRADIENT_COLOR.to_string());
            }
            colors[index] = color;
        }
        Assignment::Remove => {
            if index < colors.len() {
                colors.remove(index);
            }
        }
    }
    Ok(())
}

fn update_effects(
    current: &EffectSettings,
    keys: &[&str],
    target: &Target,
) -> MutationResult<EffectSettings> {
    let Some((key, rest)) = keys.split_first() else {
        return target.container(&Effect::ALL.map(Effect::key), &[], EffectSettings::default);
    };

    let mut next = current.clone();
    match Effect::from_key(key) {
        Some(_) if !rest.is_empty() => return Err(target.not_a_container()),
        Some(effect) => {
            let on = target.scalar(|| EffectSettings::default().get(effect))?;
            next.set(effect, on);
        }
        None => assign_extra(&mut next.extra, keys, target)?,
    }
    Ok(next)
}

fn update_word_styling(
    current: &WordStyling,
    keys: &[&str],
    target: &Target,
) -> MutationResult<WordStyling> {
    let Some((key, rest)) = keys.split_first() else {
        if let Assignment::Set(value) = target.assignment {
            let Value::Object(entries) = value else {
                return Err(target.invalid_value("expected an object".to_string()));
            };
            for (key, entry) in entries {
                target.word_index(key)?;
                target.check_word(entry)?;
            }
        }
        return target.scalar(WordStyling::default);
    };

    let index = target.word_index(key)?;

    // Cloning the map clones entry handles only; untouched words stay shared.
    let mut next = current.clone();
    if rest.is_empty() {
        match target.assignment {
            Assignment::Set(value) => {
                target.check_word(value)?;
                next.insert(index, target.decode(value)?);
            }
            Assignment::Remove => {
                next.remove(index);
            }
        }
    } else {
        let entry = current.get(index).cloned().unwrap_or_default();
        next.insert(index, update_word(entry, rest, target)?);
    }
    Ok(next)
}

fn update_word(mut entry: WordStyle, keys: &[&str], target: &Target) -> MutationResult<WordStyle> {
    let Some((key, rest)) = keys.split_first() else {
        return Err(target.invalid_path("empty path".to_string()));
    };

    if *key == "color" {
        if !rest.is_empty() {
            return Err(target.not_a_container());
        }
        entry.color = match target.assignment {
            Assignment::Set(value) => Some(target.decode(value)?),
            Assignment::Remove => None,
        };
    } else if let Some(flag) = WordFlag::from_key(key) {
        if !rest.is_empty() {
            return Err(target.not_a_container());
        }
        entry.set_flag(flag, target.scalar(|| false)?);
    } else {
        assign_extra(&mut entry.extra, keys, target)?;
    }
    Ok(entry)
}

/// Write into untyped JSON, creating objects for missing or scalar
/// intermediates
fn assign_extra(fields: &mut Extra, keys: &[&str], target: &Target) -> MutationResult<()> {
    let Some((key, rest)) = keys.split_first() else {
        return Err(target.invalid_path("empty path".to_string()));
    };

    if rest.is_empty() {
        match target.assignment {
            Assignment::Set(value) => {
                fields.insert(key.to_string(), value.clone());
            }
            Assignment::Remove => {
                fields.remove(*key);
            }
        }
        return Ok(());
    }

    let child = fields.entry(key.to_string()).or_insert(Value::Null);
    assign_json(child, rest, target)
}

fn assign_json(node: &mut Value, keys: &[&str], target: &Target) -> MutationResult<()> {
    if let Value::Array(items) = node {
        let Some((key, rest)) = keys.split_first() else {
            return Err(target.invalid_path("empty path".to_string()));
        };
        let index = target.index(key)?;

        if rest.is_empty() {
            match target.assignment {
                Assignment::Set(value) => {
                    if index >= items.len() {
                        items.resize(index + 1, Value::Null);
                    }
                    items[index] = value.clone();
                }
                Assignment::Remove => {
                    if index < items.len() {
                        items.remove(index);
                    }
                }
            }
            return Ok(());
        }

        if index >= items.len() {
            items.resize(index + 1, Value::Null);
        }
        return assign_json(&mut items[index], rest, target);
    }

    if !node.is_object() {
        *node = Value::Object(Extra::new());
    }
    match node {
        Value::Object(fields) => assign_extra(fields, keys, target),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_assignment_serialization() {
        let assignment = Assignment::from("#fff");
        let json = serde_json::to_string(&assignment).unwrap();
        let deserialized: Assignment = serde_json::from_str(&json).unwrap();

        assert_eq!(assignment, deserialized);
        assert_eq!(serde_json::to_string(&Assignment::Remove).unwrap(), r#""remove""#);
    }

    #[test]
    fn test_update_text() {
        let doc = HeadlineSettings::default();
        let next = doc.update("text", "Hello World").unwrap();

        assert_eq!(next.text, "Hello World");
        assert_eq!(doc.text, "Create Stunning Headlines");
    }

    #[test]
    fn test_rejects_empty_segments() {
        let doc = HeadlineSettings::default();

        assert!(matches!(doc.update("", true), Err(MutationError::InvalidPath { .. })));
        assert!(matches!(
            doc.update("gradient..enabled", true),
            Err(MutationError::InvalidPath { .. })
        ));
    }

    #[test]
    fn test_rejects_mistyped_values() {
        let doc = HeadlineSettings::default();

        let err = doc.update("fontSize", "huge").unwrap_err();
        assert!(matches!(err, MutationError::InvalidValue { ref path, .. } if path == "fontSize"));

        assert!(doc.update("fontWeight", "650").is_err());
        assert!(doc.update("gradient.direction", "diagonal").is_err());
        assert!(doc.update("effects.outline", 1u32).is_err());
    }

    #[test]
    fn test_rejects_descent_into_scalar() {
        let doc = HeadlineSettings::default();

        assert!(matches!(
            doc.update("fontSize.value", 12u32),
            Err(MutationError::NotAContainer { .. })
        ));
        assert!(matches!(
            doc.update("gradient.colors.0.hue", 12u32),
            Err(MutationError::NotAContainer { .. })
        ));
        assert!(matches!(
            doc.update("wordStyling.0.highlight.on", true),
            Err(MutationError::NotAContainer { .. })
        ));
    }

    #[test]
    fn test_font_size_is_not_clamped() {
        let doc = HeadlineSettings::default();
        let next = doc.update("fontSize", 500u32).unwrap();
        assert_eq!(next.font_size, 500);
    }

    #[test]
    fn test_color_write_past_end_pads_with_new_color() {
        let doc = HeadlineSettings::default();
        let next = doc.update("gradient.colors.3", "#000000").unwrap();

        assert_eq!(next.gradient.colors, vec!["#667eea", "#764ba2", "#667eea", "#000000"]);
    }

    #[test]
    fn test_color_index_limit() {
        let doc = HeadlineSettings::default();
        assert!(doc.update("gradient.colors.1024", "#000").is_ok());
        assert!(matches!(
            doc.update("gradient.colors.1025", "#000"),
            Err(MutationError::InvalidPath { .. })
        ));
        assert!(doc.update("gradient.colors.first", "#000").is_err());
    }

    #[test]
    fn test_word_entry_created_lazily() {
        let doc = HeadlineSettings::default();
        let next = doc.update("wordStyling.7.underline", true).unwrap();

        let entry = next.word_style(7).unwrap();
        assert!(entry.underline);
        assert!(!entry.highlight);
        assert_eq!(entry.color, None);
        assert!(doc.word_style(7).is_none());
    }

    #[test]
    fn test_remove_resets_word() {
        let doc = HeadlineSettings::default()
            .update("wordStyling.1.background", true)
            .unwrap()
            .update("wordStyling.1.color", "#123456")
            .unwrap();

        let cleared_color = doc.update("wordStyling.1.color", Assignment::Remove).unwrap();
        assert_eq!(cleared_color.word_style(1).unwrap().color, None);
        assert!(cleared_color.word_style(1).unwrap().background);

        let reset = doc.update("wordStyling.1", Assignment::Remove).unwrap();
        assert!(reset.word_style(1).is_none());
    }

    #[test]
    fn test_remove_typed_field_restores_default() {
        let doc = HeadlineSettings::default().update("fontSize", 90u32).unwrap();
        let reset = doc.update("fontSize", Assignment::Remove).unwrap();
        assert_eq!(reset.font_size, 48);

        let removed = doc.update("gradient.colors.0", Assignment::Remove).unwrap();
        assert_eq!(removed.gradient.colors, vec!["#764ba2"]);
    }

    #[test]
    fn test_unknown_paths_create_containers() {
        let doc = HeadlineSettings::default();
        let next = doc.update("theme.palette.primary", "#ff00ff").unwrap();

        assert_eq!(next.extra["theme"], json!({ "palette": { "primary": "#ff00ff" } }));
        assert_eq!(next.read("theme.palette.primary"), Some(json!("#ff00ff")));

        let nested = doc.update("gradient.stops.0", json!(0.5)).unwrap();
        assert_eq!(nested.gradient.extra["stops"], json!({ "0": 0.5 }));
        assert!(Arc::ptr_eq(&nested.effects, &doc.effects));
    }

    #[test]
    fn test_unknown_array_index_write() {
        let doc = HeadlineSettings::default()
            .update("tags", json!(["a"]))
            .unwrap()
            .update("tags.2", "c")
            .unwrap();

        assert_eq!(doc.extra["tags"], json!(["a", null, "c"]));
    }

    #[test]
    fn test_read_paths() {
        let doc = HeadlineSettings::default();

        assert_eq!(doc.read("text"), Some(json!("Create Stunning Headlines")));
        assert_eq!(doc.read("gradient.colors.1"), Some(json!("#764ba2")));
        assert_eq!(doc.read("fontWeight"), Some(json!("700")));
        assert_eq!(doc.read("gradient.colors.9"), None);
        assert_eq!(doc.read("wordStyling.0"), None);
        assert_eq!(doc.read(""), None);
    }

    #[test]
    fn test_partial_containers_are_rejected() {
        let doc = HeadlineSettings::default();

        let cases = [
            ("effects", json!({ "textShadow": true })),
            ("gradient", json!({ "enabled": false })),
            ("wordStyling.0", json!({ "highlight": true })),
            ("wordStyling", json!({ "0": { "highlight": true } })),
            ("effects", json!(true)),
        ];

        for (path, value) in cases {
            assert!(
                matches!(doc.update(path, value), Err(MutationError::InvalidValue { .. })),
                "accepted partial write at {}",
                path
            );
        }
    }

    #[test]
    fn test_null_fields_are_rejected() {
        let doc = HeadlineSettings::default();

        assert!(matches!(
            doc.update("wordStyling.0.color", Value::Null),
            Err(MutationError::InvalidValue { .. })
        ));
        assert!(matches!(
            doc.update(
                "wordStyling.0",
                json!({ "highlight": true, "underline": false, "background": false, "color": null })
            ),
            Err(MutationError::InvalidValue { .. })
        ));
        assert!(matches!(
            doc.update(
                "gradient",
                json!({ "enabled": null, "direction": "up", "colors": [] })
            ),
            Err(MutationError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_whole_effects_write_replaces_every_toggle() {
        let doc = HeadlineSettings::default();
        let value = json!({
            "fadeIn": false,
            "hoverGlow": false,
            "letterAnimation": false,
            "textShadow": true,
            "outline": false
        });

        let next = doc.update("effects", value.clone()).unwrap();

        assert!(!next.effects.fade_in);
        assert!(!next.effects.hover_glow);
        assert!(next.effects.text_shadow);
        assert_eq!(next.read("effects"), Some(value));
    }

    #[test]
    fn test_word_index_must_be_canonical() {
        let doc = HeadlineSettings::default();

        assert!(matches!(
            doc.update("wordStyling.01.highlight", true),
            Err(MutationError::InvalidPath { .. })
        ));
        assert!(matches!(
            doc.update("wordStyling", json!({ "01": { "highlight": true, "underline": false, "background": false } })),
            Err(MutationError::InvalidPath { .. })
        ));
    }
}
