//! Form elements

use crate::catalog;
use crate::{ElementId, ElementPatch, ElementSettings, ElementType};
use serde::{Deserialize, Serialize};

/// A single field or content block within a step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    id: ElementId,
    #[serde(rename = "type")]
    element_type: ElementType,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default)]
    pub settings: ElementSettings,
}

impl Element {
    /// Create an element populated with the catalog defaults for its type
    pub fn new(id: ElementId, element_type: ElementType) -> Self {
        let defaults = catalog::defaults_for(element_type);
        Self {
            id,
            element_type,
            label: defaults.label.to_string(),
            description: None,
            placeholder: None,
            required: false,
            options: defaults.options,
            content: defaults.content,
            settings: defaults.settings,
        }
    }

    pub fn id(&self) -> &ElementId {
        &self.id
    }

    pub fn element_type(&self) -> ElementType {
        self.element_type
    }

    /// Deep copy of this element under a new id
    pub fn duplicate(&self, id: ElementId) -> Self {
        Self {
            id,
            element_type: self.element_type,
            label: self.label.clone(),
            description: self.description.clone(),
            placeholder: self.placeholder.clone(),
            required: self.required,
            options: self.options.clone(),
            content: self.content.clone(),
            settings: self.settings.clone(),
        }
    }

    /// Merge a patch into this element.
    ///
    /// Only fields present in the patch are written. Returns false when the
    /// patch carried no fields at all.
    pub fn apply_patch(&mut self, patch: ElementPatch) -> bool {
        if patch.is_empty() {
            return false;
        }

        if let Some(label) = patch.label {
            self.label = label;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(placeholder) = patch.placeholder {
            self.placeholder = placeholder;
        }
        if let Some(required) = patch.required {
            self.required = required;
        }
        if let Some(options) = patch.options {
            self.options = options;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(settings) = patch.settings {
            self.settings = settings;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dropdown() -> Element {
        Element::new(ElementId::new("el-1"), ElementType::Dropdown)
    }

    #[test]
    fn test_new_element_defaults() {
        let el = Element::new(ElementId::new("el-1"), ElementType::ShortAnswer);
        assert_eq!(el.label, "Short Answer");
        assert!(!el.required);
        assert!(el.description.is_none());
        assert!(el.placeholder.is_none());
        assert!(el.options.is_none());
        assert!(el.content.is_none());
        assert!(el.settings.is_empty());
    }

    #[test]
    fn test_duplicate_is_independent() {
        let original = dropdown();
        let mut copy = original.duplicate(ElementId::new("el-2"));

        assert_eq!(copy.id().as_str(), "el-2");
        assert_eq!(copy.options, original.options);

        copy.options.as_mut().unwrap().push("Option 4".to_string());
        copy.label = "Changed".to_string();

        assert_eq!(original.options.as_ref().unwrap().len(), 3);
        assert_eq!(original.label, "Dropdown");
    }

    #[test]
    fn test_patch_overwrites_only_present_fields() {
        let mut el = dropdown();
        el.description = Some("Pick one".to_string());
        el.placeholder = Some("Choose".to_string());

        let changed = el.apply_patch(ElementPatch::new().label("Country").required(true));

        assert!(changed);
        assert_eq!(el.label, "Country");
        assert!(el.required);
        assert_eq!(el.description.as_deref(), Some("Pick one"));
        assert_eq!(el.placeholder.as_deref(), Some("Choose"));
        assert_eq!(el.options.as_ref().unwrap().len(), 3);
    }

    #[test]
    fn test_patch_can_clear_optional_fields() {
        let mut el = dropdown();
        el.description = Some("Pick one".to_string());

        el.apply_patch(ElementPatch::new().clear_description().clear_options());

        assert!(el.description.is_none());
        assert!(el.options.is_none());
    }

    #[test]
    fn test_empty_patch_changes_nothing() {
        let mut el = dropdown();
        let before = el.clone();

        assert!(!el.apply_patch(ElementPatch::default()));
        assert_eq!(el, before);
    }

    #[test]
    fn test_serialized_shape() {
        let el = dropdown();
        let json = serde_json::to_value(&el).unwrap();

        assert_eq!(
            json,
            json!({
                "id": "el-1",
                "type": "dropdown",
                "label": "Dropdown",
                "required": false,
                "options": ["Option 1", "Option 2", "Option 3"],
                "settings": {}
            })
        );
    }

    #[test]
    fn test_long_answer_serializes_content() {
        let el = Element::new(ElementId::new("el-9"), ElementType::LongAnswer);
        let json = serde_json::to_value(&el).unwrap();

        assert_eq!(json["content"], json!(""));
        assert_eq!(json["settings"]["mode"], json!("normal"));
        assert!(json.get("options").is_none());
    }
}
