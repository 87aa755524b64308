//! Element catalog
//!
//! Static registry of insertable element types with their palette metadata,
//! plus the defaults applied when an element of each type is created.

use crate::{ElementSettings, ElementType};
use serde::Serialize;

/// Label used when a type name is not recognized
pub const UNKNOWN_ELEMENT_LABEL: &str = "New Element";

/// Choices given to new dropdown, multi-select and radio button elements
pub const DEFAULT_OPTIONS: [&str; 3] = ["Option 1", "Option 2", "Option 3"];

/// A palette entry describing one insertable element type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteEntry {
    #[serde(rename = "type")]
    pub element_type: ElementType,
    pub label: &'static str,
    pub icon: &'static str,
}

const PALETTE: [PaletteEntry; 10] = [
    PaletteEntry { element_type: ElementType::Heading, label: "Heading", icon: "H" },
    PaletteEntry { element_type: ElementType::TextBox, label: "Text Box", icon: "T" },
    PaletteEntry { element_type: ElementType::ShortAnswer, label: "Short Answer", icon: "SA" },
    PaletteEntry { element_type: ElementType::LongAnswer, label: "Long Answer", icon: "LA" },
    PaletteEntry { element_type: ElementType::FileUpload, label: "File Upload", icon: "📎" },
    PaletteEntry { element_type: ElementType::Dropdown, label: "Dropdown", icon: "▼" },
    PaletteEntry { element_type: ElementType::MultiSelect, label: "Multi Select", icon: "☑" },
    PaletteEntry { element_type: ElementType::RadioButton, label: "Radio Button", icon: "○" },
    PaletteEntry { element_type: ElementType::Checkbox, label: "Checkbox", icon: "✓" },
    PaletteEntry { element_type: ElementType::DateRange, label: "Date Range", icon: "📅" },
];

/// All palette entries, in display order
pub fn palette() -> &'static [PaletteEntry] {
    &PALETTE
}

/// Palette entry for a single type
pub fn palette_entry(element_type: ElementType) -> Option<&'static PaletteEntry> {
    PALETTE.iter().find(|entry| entry.element_type == element_type)
}

/// Default label for a type given by its wire name.
///
/// Only the canonical names are recognized. Anything else, including the
/// legacy `rich-text` alias, falls back to [`UNKNOWN_ELEMENT_LABEL`].
pub fn default_label_for_name(name: &str) -> &'static str {
    ElementType::ALL
        .iter()
        .find(|t| t.as_str() == name)
        .map(|t| t.default_label())
        .unwrap_or(UNKNOWN_ELEMENT_LABEL)
}

/// Field values a new element of a given type starts with
#[derive(Debug, Clone, PartialEq)]
pub struct ElementDefaults {
    pub label: &'static str,
    pub settings: ElementSettings,
    pub options: Option<Vec<String>>,
    pub content: Option<String>,
}

/// Compute the creation defaults for a type
pub fn defaults_for(element_type: ElementType) -> ElementDefaults {
    let (settings, content) = if element_type.is_rich_text() {
        (ElementSettings::rich_text(), Some(String::new()))
    } else {
        (ElementSettings::new(), None)
    };

    let options: Option<Vec<String>> = element_type
        .has_options()
        .then(|| DEFAULT_OPTIONS.iter().map(|s| s.to_string()).collect());

    ElementDefaults {
        label: element_type.default_label(),
        settings,
        options,
        content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_covers_every_type_once() {
        assert_eq!(palette().len(), ElementType::ALL.len());
        for t in ElementType::ALL {
            assert_eq!(palette().iter().filter(|e| e.element_type == t).count(), 1);
        }
    }

    #[test]
    fn test_palette_label_is_not_default_label() {
        let entry = palette_entry(ElementType::RadioButton).unwrap();
        assert_eq!(entry.label, "Radio Button");
        assert_eq!(entry.icon, "○");
        assert_eq!(defaults_for(ElementType::RadioButton).label, "Radio Buttons");
    }

    #[test]
    fn test_default_label_for_name() {
        assert_eq!(default_label_for_name("date-range"), "Date Range");
        assert_eq!(default_label_for_name("long-answer"), "Long Answer");
        assert_eq!(default_label_for_name("rich-text"), "New Element");
        assert_eq!(default_label_for_name("signature"), "New Element");
        assert_eq!(default_label_for_name(""), "New Element");
    }

    #[test]
    fn test_choice_defaults() {
        for t in [ElementType::Dropdown, ElementType::MultiSelect, ElementType::RadioButton] {
            let defaults = defaults_for(t);
            assert_eq!(
                defaults.options,
                Some(vec!["Option 1".to_string(), "Option 2".to_string(), "Option 3".to_string()])
            );
            assert!(defaults.content.is_none());
            assert!(defaults.settings.is_empty());
        }
    }

    #[test]
    fn test_long_answer_defaults() {
        let defaults = defaults_for(ElementType::LongAnswer);
        assert_eq!(defaults.content.as_deref(), Some(""));
        assert!(defaults.options.is_none());
        assert_eq!(defaults.settings, ElementSettings::rich_text());
    }

    #[test]
    fn test_plain_defaults() {
        for t in [
            ElementType::Heading,
            ElementType::TextBox,
            ElementType::ShortAnswer,
            ElementType::FileUpload,
            ElementType::Checkbox,
            ElementType::DateRange,
        ] {
            let defaults = defaults_for(t);
            assert!(defaults.settings.is_empty());
            assert!(defaults.options.is_none());
            assert!(defaults.content.is_none());
        }
    }

    #[test]
    fn test_palette_serializes_type_key() {
        let json = serde_json::to_value(palette_entry(ElementType::Heading).unwrap()).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "heading", "label": "Heading", "icon": "H" }));
    }
}
