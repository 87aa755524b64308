//! Type-specific element settings
//!
//! Settings are an open attribute bag. The model only builds the initial bag
//! for each element type and forwards whatever callers put in it.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Text mode given to new rich text elements
pub const TEXT_MODE_NORMAL: &str = "normal";

/// Open attribute map attached to every element
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementSettings(Map<String, Value>);

impl ElementSettings {
    /// Create an empty settings bag
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Initial settings for rich text elements: all formatting flags off,
    /// normal mode, and an unset `validation.required` flag
    pub fn rich_text() -> Self {
        let mut map = Map::new();
        map.insert("formatting".to_string(), TextFormatting::default().to_value());
        map.insert("mode".to_string(), Value::String(TEXT_MODE_NORMAL.to_string()));
        map.insert("validation".to_string(), json!({ "required": false }));
        Self(map)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Set an attribute, returning the previous value
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Typed view of the `formatting` attribute, if present and well-formed
    pub fn formatting(&self) -> Option<TextFormatting> {
        self.0
            .get("formatting")
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }
}

impl From<Map<String, Value>> for ElementSettings {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Formatting flags used by rich text elements
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextFormatting {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub align_center: bool,
    pub bullet_list: bool,
    pub checkbox: bool,
}

impl TextFormatting {
    /// JSON form stored in the settings bag
    pub fn to_value(&self) -> Value {
        json!({
            "bold": self.bold,
            "italic": self.italic,
            "underline": self.underline,
            "alignCenter": self.align_center,
            "bulletList": self.bullet_list,
            "checkbox": self.checkbox,
        })
    }
}
