//! Form Model - Template document structure and types
//!
//! This crate provides the document model for the form builder: a template
//! owning an ordered list of steps, each owning an ordered list of typed
//! elements. Structural invariants (non-empty step list, contiguous step
//! ordering, unique identifiers) are enforced by the types themselves.

mod error;
mod ids;
mod element_type;
mod settings;
mod element;
mod patch;
mod step;
mod template;
pub mod catalog;

pub use error::*;
pub use ids::*;
pub use element_type::*;
pub use settings::*;
pub use element::*;
pub use patch::*;
pub use step::*;
pub use template::*;
pub use catalog::{palette, PaletteEntry};
