//! The closed set of element kinds a step can contain

use crate::FormModelError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Kind of a form element. Serialized in kebab-case (`"short-answer"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementType {
    Heading,
    TextBox,
    ShortAnswer,
    /// Multi-line rich text. Older documents call this `rich-text`.
    #[serde(alias = "rich-text")]
    LongAnswer,
    FileUpload,
    Dropdown,
    MultiSelect,
    RadioButton,
    Checkbox,
    DateRange,
}

impl ElementType {
    /// Every element type, in palette order
    pub const ALL: [ElementType; 10] = [
        ElementType::Heading,
        ElementType::TextBox,
        ElementType::ShortAnswer,
        ElementType::LongAnswer,
        ElementType::FileUpload,
        ElementType::Dropdown,
        ElementType::MultiSelect,
        ElementType::RadioButton,
        ElementType::Checkbox,
        ElementType::DateRange,
    ];

    /// Wire name of this type
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Heading => "heading",
            ElementType::TextBox => "text-box",
            ElementType::ShortAnswer => "short-answer",
            ElementType::LongAnswer => "long-answer",
            ElementType::FileUpload => "file-upload",
            ElementType::Dropdown => "dropdown",
            ElementType::MultiSelect => "multi-select",
            ElementType::RadioButton => "radio-button",
            ElementType::Checkbox => "checkbox",
            ElementType::DateRange => "date-range",
        }
    }

    /// Label given to a freshly created element of this type.
    ///
    /// This is not always the palette label: radio buttons are created as
    /// "Radio Buttons" but listed in the palette as "Radio Button".
    pub fn default_label(&self) -> &'static str {
        match self {
            ElementType::Heading => "Heading",
            ElementType::TextBox => "Text Box",
            ElementType::ShortAnswer => "Short Answer",
            ElementType::LongAnswer => "Long Answer",
            ElementType::FileUpload => "File Upload",
            ElementType::Dropdown => "Dropdown",
            ElementType::MultiSelect => "Multi Select",
            ElementType::RadioButton => "Radio Buttons",
            ElementType::Checkbox => "Checkbox",
            ElementType::DateRange => "Date Range",
        }
    }

    /// Whether elements of this type carry a list of choices
    pub fn has_options(&self) -> bool {
        matches!(
            self,
            ElementType::Dropdown | ElementType::MultiSelect | ElementType::RadioButton
        )
    }

    /// Whether elements of this type carry a rich text body and formatting settings
    pub fn is_rich_text(&self) -> bool {
        matches!(self, ElementType::LongAnswer)
    }
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementType {
    type Err = FormModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "rich-text" {
            return Ok(ElementType::LongAnswer);
        }
        ElementType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| FormModelError::UnknownElementType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_match_serde() {
        for t in ElementType::ALL {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.as_str()));
        }
    }

    #[test]
    fn test_parse_round_trips_every_type() {
        for t in ElementType::ALL {
            assert_eq!(t.as_str().parse::<ElementType>().unwrap(), t);
        }
    }

    #[test]
    fn test_rich_text_alias() {
        assert_eq!("rich-text".parse::<ElementType>().unwrap(), ElementType::LongAnswer);
        let t: ElementType = serde_json::from_str("\"rich-text\"").unwrap();
        assert_eq!(t, ElementType::LongAnswer);
    }

    #[test]
    fn test_unknown_type_is_an_error() {
        let err = "signature".parse::<ElementType>().unwrap_err();
        assert_eq!(err, FormModelError::UnknownElementType("signature".to_string()));
    }

    #[test]
    fn test_choice_types() {
        let choices: Vec<_> = ElementType::ALL.iter().filter(|t| t.has_options()).collect();
        assert_eq!(
            choices,
            vec![&ElementType::Dropdown, &ElementType::MultiSelect, &ElementType::RadioButton]
        );
    }

    #[test]
    fn test_radio_default_label_differs_from_palette() {
        assert_eq!(ElementType::RadioButton.default_label(), "Radio Buttons");
    }
}
