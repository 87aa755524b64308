//! Snapshot serialization

use crate::Result;
use form_model::Template;

/// Serialize a template to snapshot JSON
pub fn serialize(template: &Template, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(template)?
    } else {
        serde_json::to_string(template)?
    };
    Ok(json)
}

/// Deserialize snapshot JSON, rejecting documents that break the model invariants
pub fn deserialize(json: &str) -> Result<Template> {
    let template: Template = serde_json::from_str(json)?;
    template.validate()?;
    Ok(template)
}
