//! Builder settings
//!
//! Defaults applied when the engine creates a template, and how it renders
//! exports. Settings live in memory and are handed to
//! [`crate::FormBuilder::with_settings`].

use serde::{Deserialize, Serialize};

/// Engine configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BuilderSettings {
    /// Name given to new templates
    pub template_name: String,
    /// Description given to new templates
    pub template_description: String,
    /// Whether JSON exports are pretty-printed
    pub pretty_export: bool,
}

impl Default for BuilderSettings {
    fn default() -> Self {
        Self {
            template_name: "New Form Template".to_string(),
            template_description: String::new(),
            pretty_export: true,
        }
    }
}
