//! Serializable editing commands
//!
//! Each variant maps onto one [`FormBuilder`] operation, so a presentation
//! layer can drive the engine with JSON messages such as
//! `{"type": "addElement", "elementType": "dropdown", "stepId": "..."}`.

use crate::{Clock, FormBuilder, IdProvider, Outcome, Result};
use form_model::{ElementId, ElementPatch, ElementType, StepId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// An editing command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum BuilderCommand {
    SelectStep { step_id: StepId },
    AddStep,
    UpdateStepTitle { step_id: StepId, title: String },
    DeleteStep { step_id: StepId },
    DuplicateStep { step_id: StepId },
    ReorderSteps { old_index: usize, new_index: usize },
    AddElement { element_type: ElementType, step_id: StepId },
    UpdateElement { element_id: ElementId, patch: ElementPatch },
    DeleteElement { element_id: ElementId },
    ReorderElements { step_id: StepId, old_index: usize, new_index: usize },
    RenameTemplate { name: String },
    SetDescription { description: Option<String> },
    Reset,
    TogglePreview,
    OpenStepsModal,
    CloseStepsModal,
}

impl BuilderCommand {
    /// Get a display name for this command
    pub fn display_name(&self) -> &'static str {
        match self {
            BuilderCommand::SelectStep { .. } => "Select Step",
            BuilderCommand::AddStep => "Add Step",
            BuilderCommand::UpdateStepTitle { .. } => "Rename Step",
            BuilderCommand::DeleteStep { .. } => "Delete Step",
            BuilderCommand::DuplicateStep { .. } => "Duplicate Step",
            BuilderCommand::ReorderSteps { .. } => "Reorder Steps",
            BuilderCommand::AddElement { .. } => "Add Element",
            BuilderCommand::UpdateElement { .. } => "Update Element",
            BuilderCommand::DeleteElement { .. } => "Delete Element",
            BuilderCommand::ReorderElements { .. } => "Reorder Elements",
            BuilderCommand::RenameTemplate { .. } => "Rename Template",
            BuilderCommand::SetDescription { .. } => "Set Description",
            BuilderCommand::Reset => "Reset Template",
            BuilderCommand::TogglePreview => "Toggle Preview",
            BuilderCommand::OpenStepsModal => "Open Steps",
            BuilderCommand::CloseStepsModal => "Close Steps",
        }
    }
}

/// Result of executing a command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandOutput {
    pub outcome: Outcome,
    /// Id of the step or element the command created, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_id: Option<String>,
}

impl CommandOutput {
    fn from_outcome(outcome: Outcome) -> Self {
        Self {
            outcome,
            created_id: None,
        }
    }

    fn created(id: Option<String>) -> Self {
        Self {
            outcome: id.is_some().into(),
            created_id: id,
        }
    }
}

impl<I: IdProvider, C: Clock> FormBuilder<I, C> {
    /// Apply a command.
    ///
    /// Fails only when the command is refused (deleting the last step) or the
    /// document cannot be encoded.
    pub fn execute(&mut self, command: BuilderCommand) -> Result<CommandOutput> {
        debug!(command = command.display_name(), "executing command");
        let output = match command {
            BuilderCommand::SelectStep { step_id } => {
                CommandOutput::from_outcome(self.select_step(&step_id))
            }
            BuilderCommand::AddStep => CommandOutput::created(Some(self.add_step().into_inner())),
            BuilderCommand::UpdateStepTitle { step_id, title } => {
                CommandOutput::from_outcome(self.update_step_title(&step_id, title))
            }
            BuilderCommand::DeleteStep { step_id } => {
                CommandOutput::from_outcome(self.delete_step(&step_id)?)
            }
            BuilderCommand::DuplicateStep { step_id } => {
                CommandOutput::created(self.duplicate_step(&step_id).map(StepId::into_inner))
            }
            BuilderCommand::ReorderSteps { old_index, new_index } => {
                CommandOutput::from_outcome(self.reorder_steps(old_index, new_index))
            }
            BuilderCommand::AddElement { element_type, step_id } => CommandOutput::created(
                self.add_element(element_type, &step_id)
                    .map(ElementId::into_inner),
            ),
            BuilderCommand::UpdateElement { element_id, patch } => {
                CommandOutput::from_outcome(self.update_element(&element_id, patch))
            }
            BuilderCommand::DeleteElement { element_id } => {
                CommandOutput::from_outcome(self.delete_element(&element_id))
            }
            BuilderCommand::ReorderElements {
                step_id,
                old_index,
                new_index,
            } => CommandOutput::from_outcome(self.reorder_elements(&step_id, old_index, new_index)),
            BuilderCommand::RenameTemplate { name } => {
                CommandOutput::from_outcome(self.rename_template(name))
            }
            BuilderCommand::SetDescription { description } => {
                CommandOutput::from_outcome(self.set_description(description))
            }
            BuilderCommand::Reset => {
                self.reset();
                CommandOutput::from_outcome(Outcome::Applied)
            }
            BuilderCommand::TogglePreview => {
                self.toggle_preview();
                CommandOutput::from_outcome(Outcome::Applied)
            }
            BuilderCommand::OpenStepsModal => {
                self.open_steps_modal();
                CommandOutput::from_outcome(Outcome::Applied)
            }
            BuilderCommand::CloseStepsModal => {
                self.close_steps_modal();
                CommandOutput::from_outcome(Outcome::Applied)
            }
        };
        Ok(output)
    }
}
