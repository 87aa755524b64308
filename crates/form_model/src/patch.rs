//! Partial element updates
//!
//! Every field of [`ElementPatch`] is optional and an absent field leaves the
//! element untouched. Fields that are themselves optional on the element use
//! `Option<Option<T>>`: `None` means "leave as is", `Some(None)` clears the
//! value and `Some(Some(v))` sets it. In JSON an omitted key leaves the value
//! alone and an explicit `null` clears it.

use crate::ElementSettings;
use serde::{Deserialize, Deserializer, Serialize};

/// Field set merged into an existing element.
///
/// The element id and type are fixed at creation and cannot be patched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub placeholder: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub options: Option<Option<Vec<String>>>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub content: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<ElementSettings>,
}

/// A key that is present in the input is `Some`, even when its value is `null`
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl ElementPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no field is present
    pub fn is_empty(&self) -> bool {
        self.label.is_none()
            && self.description.is_none()
            && self.placeholder.is_none()
            && self.required.is_none()
            && self.options.is_none()
            && self.content.is_none()
            && self.settings.is_none()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Some(description.into()));
        self
    }

    pub fn clear_description(mut self) -> Self {
        self.description = Some(None);
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(Some(placeholder.into()));
        self
    }

    pub fn clear_placeholder(mut self) -> Self {
        self.placeholder = Some(None);
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    pub fn options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = Some(Some(options.into_iter().map(Into::into).collect()));
        self
    }

    pub fn clear_options(mut self) -> Self {
        self.options = Some(None);
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(Some(content.into()));
        self
    }

    pub fn clear_content(mut self) -> Self {
        self.content = Some(None);
        self
    }

    pub fn settings(mut self, settings: ElementSettings) -> Self {
        self.settings = Some(settings);
        self
    }
}
