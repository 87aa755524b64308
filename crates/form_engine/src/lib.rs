//! Form Engine - Mutation engine for form templates
//!
//! This crate implements the template store: an instantiable [`FormBuilder`]
//! that owns a single template and applies structural edits to it while
//! keeping the model invariants intact. Every edit is also available as a
//! serializable [`BuilderCommand`] for hosts that drive the engine with
//! messages.

mod error;
mod provider;
mod settings;
mod outcome;
mod ui_flags;
mod builder;
mod command;
mod shared;

pub use error::*;
pub use provider::*;
pub use settings::*;
pub use outcome::*;
pub use ui_flags::*;
pub use builder::*;
pub use command::*;
pub use shared::*;
