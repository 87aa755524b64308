//! Snapshot file I/O

use crate::{Result, StoreError};
use form_engine::{BuilderSettings, Clock, FormBuilder, IdProvider, SaveReport};
use form_model::Template;
use std::path::Path;

/// File extension for template snapshots
pub const FILE_EXTENSION: &str = "formtpl.json";

/// Save a template snapshot to a file
pub async fn save_template(template: &Template, path: impl AsRef<Path>) -> Result<()> {
    let json = crate::serialize(template, true)?;
    tokio::fs::write(path, json).await?;
    Ok(())
}

/// Load and validate a template snapshot from a file
pub async fn load_template(path: impl AsRef<Path>) -> Result<Template> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(StoreError::FileNotFound(path.display().to_string()));
    }

    let json = tokio::fs::read_to_string(path).await?;
    crate::deserialize(&json)
}

/// Write the JSON carried by a save report
pub async fn write_save_report(report: &SaveReport, path: impl AsRef<Path>) -> Result<()> {
    tokio::fs::write(path, &report.json).await?;
    tracing::debug!(template_id = %report.template_id, "save report written");
    Ok(())
}

/// Save a template snapshot synchronously
pub fn save_template_sync(template: &Template, path: impl AsRef<Path>) -> Result<()> {
    let json = crate::serialize(template, true)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Load a template snapshot synchronously
pub fn load_template_sync(path: impl AsRef<Path>) -> Result<Template> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(StoreError::FileNotFound(path.display().to_string()));
    }

    let json = std::fs::read_to_string(path)?;
    crate::deserialize(&json)
}

/// Load a snapshot file and open it in a new builder
pub fn open_builder_sync<I: IdProvider, C: Clock>(
    path: impl AsRef<Path>,
    settings: BuilderSettings,
    ids: I,
    clock: C,
) -> Result<FormBuilder<I, C>> {
    let template = load_template_sync(path)?;
    Ok(FormBuilder::from_template(template, settings, ids, clock)?)
}
