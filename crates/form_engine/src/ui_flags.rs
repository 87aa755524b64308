//! Transient presentation state held by the engine
//!
//! These flags have no effect on the document. They live here so every
//! presentation component reads the same copy.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiFlags {
    preview_mode: bool,
    steps_modal_open: bool,
}

impl UiFlags {
    pub fn preview_mode(&self) -> bool {
        self.preview_mode
    }

    pub fn steps_modal_open(&self) -> bool {
        self.steps_modal_open
    }

    /// Flip preview mode, returning the new value
    pub fn toggle_preview(&mut self) -> bool {
        self.preview_mode = !self.preview_mode;
        self.preview_mode
    }

    pub fn open_steps_modal(&mut self) {
        self.steps_modal_open = true;
    }

    pub fn close_steps_modal(&mut self) {
        self.steps_modal_open = false;
    }

    /// Back to the initial state: editing mode, modal closed
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
