//! The template store: owns one template and applies edits to it

use crate::{
    BuilderSettings, Clock, EngineError, IdProvider, Outcome, Result, SaveReport, SystemClock,
    UiFlags, UuidIdProvider,
};
use form_model::{
    catalog, resolve_current_step, Element, ElementId, ElementPatch, ElementType, FormModelError,
    PaletteEntry, Step, StepId, Template, TemplateId,
};
use tracing::{debug, trace, warn};

/// Editing engine for a single form template.
///
/// The builder owns the document, the id of the current step, and the
/// transient UI flags. All edits go through `&mut self`, so a builder sees a
/// strictly linear history. Builders are independent of each other; wrap one
/// in [`crate::SharedFormBuilder`] to hand it to several callers.
pub struct FormBuilder<I = UuidIdProvider, C = SystemClock> {
    template: Template,
    current_step_id: Option<StepId>,
    ui: UiFlags,
    settings: BuilderSettings,
    ids: I,
    clock: C,
}

impl FormBuilder {
    /// Create a builder with random ids and the system clock
    pub fn new() -> Self {
        Self::with_providers(UuidIdProvider, SystemClock)
    }
}

impl Default for FormBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: IdProvider, C: Clock> FormBuilder<I, C> {
    /// Create a builder with custom id and clock providers
    pub fn with_providers(ids: I, clock: C) -> Self {
        Self::with_settings(BuilderSettings::default(), ids, clock)
    }

    /// Create a builder with custom settings and providers
    pub fn with_settings(settings: BuilderSettings, mut ids: I, clock: C) -> Self {
        let template = fresh_template(&settings, &mut ids, &clock);
        let current_step_id = template.first_step().map(|s| s.id().clone());
        debug!(template_id = %template.id(), "template created");
        Self {
            template,
            current_step_id,
            ui: UiFlags::default(),
            settings,
            ids,
            clock,
        }
    }

    /// Adopt an existing template, such as one loaded from a snapshot.
    ///
    /// The template is validated first and its first step becomes current.
    pub fn from_template(template: Template, settings: BuilderSettings, ids: I, clock: C) -> Result<Self> {
        template.validate()?;
        let current_step_id = template.first_step().map(|s| s.id().clone());
        debug!(template_id = %template.id(), steps = template.step_count(), "template adopted");
        Ok(Self {
            template,
            current_step_id,
            ui: UiFlags::default(),
            settings,
            ids,
            clock,
        })
    }

    // ========================================================================
    // Read access
    // ========================================================================

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn settings(&self) -> &BuilderSettings {
        &self.settings
    }

    pub fn ui_flags(&self) -> UiFlags {
        self.ui
    }

    /// Id of the current step, as last selected. It may no longer resolve.
    pub fn current_step_id(&self) -> Option<&StepId> {
        self.current_step_id.as_ref()
    }

    /// The current step, resolved against the live step list
    pub fn current_step(&self) -> Option<&Step> {
        resolve_current_step(&self.template, self.current_step_id.as_ref())
    }

    pub fn step(&self, step_id: &StepId) -> Option<&Step> {
        self.template.step(step_id)
    }

    /// Find an element in any step
    pub fn element(&self, element_id: &ElementId) -> Option<&Element> {
        self.template.find_element(element_id).map(|(_, el)| el)
    }

    /// Element types available for insertion
    pub fn palette(&self) -> &'static [PaletteEntry] {
        catalog::palette()
    }

    // ========================================================================
    // Template lifecycle
    // ========================================================================

    /// Build a fresh template with a single empty "Step 1".
    ///
    /// The builder's own document is left alone; see [`FormBuilder::reset`].
    pub fn create_template(&mut self) -> Template {
        fresh_template(&self.settings, &mut self.ids, &self.clock)
    }

    /// Replace the document with a fresh template and clear the UI flags
    pub fn reset(&mut self) {
        self.template = self.create_template();
        self.current_step_id = self.template.first_step().map(|s| s.id().clone());
        self.ui.clear();
        debug!(template_id = %self.template.id(), "template reset");
    }

    /// Rename the template
    pub fn rename_template(&mut self, name: impl Into<String>) -> Outcome {
        self.template.name = name.into();
        self.touch();
        Outcome::Applied
    }

    /// Set or clear the template description
    pub fn set_description(&mut self, description: Option<String>) -> Outcome {
        self.template.description = description;
        self.touch();
        Outcome::Applied
    }

    // ========================================================================
    // Steps
    // ========================================================================

    /// Make a step current. Unknown ids are ignored.
    pub fn select_step(&mut self, step_id: &StepId) -> Outcome {
        if self.template.step(step_id).is_none() {
            trace!(step_id = %step_id, "select_step: no such step");
            return Outcome::Unchanged;
        }
        self.current_step_id = Some(step_id.clone());
        Outcome::Applied
    }

    /// Append a new step titled "Step N" and make it current
    pub fn add_step(&mut self) -> StepId {
        let position = self.template.step_count() + 1;
        let step_id = StepId::new(self.ids.next_id());
        let order = self
            .template
            .push_step(Step::new(step_id.clone(), Step::default_title(position)));
        self.current_step_id = Some(step_id.clone());
        self.touch();
        debug!(step_id = %step_id, order, "step added");
        step_id
    }

    pub fn update_step_title(&mut self, step_id: &StepId, title: impl Into<String>) -> Outcome {
        let Some(step) = self.template.step_mut(step_id) else {
            trace!(step_id = %step_id, "update_step_title: no such step");
            return Outcome::Unchanged;
        };
        step.title = title.into();
        self.touch();
        Outcome::Applied
    }

    /// Delete a step and renumber the remaining ones.
    ///
    /// Deleting the only step is refused with [`EngineError::LastStep`] and
    /// leaves the document untouched. If the deleted step was current, the
    /// first remaining step becomes current.
    pub fn delete_step(&mut self, step_id: &StepId) -> Result<Outcome> {
        match self.template.remove_step(step_id) {
            Err(FormModelError::LastStep) => {
                warn!(step_id = %step_id, "refusing to delete the last step");
                Err(EngineError::LastStep)
            }
            Err(e) => Err(e.into()),
            Ok(None) => {
                trace!(step_id = %step_id, "delete_step: no such step");
                Ok(Outcome::Unchanged)
            }
            Ok(Some(_)) => {
                if self.current_step_id.as_ref() == Some(step_id) {
                    self.current_step_id = self.template.first_step().map(|s| s.id().clone());
                }
                self.touch();
                debug!(step_id = %step_id, remaining = self.template.step_count(), "step deleted");
                Ok(Outcome::Applied)
            }
        }
    }

    /// Append a deep copy of a step titled "{title} (Copy)".
    ///
    /// The copy and each of its elements get fresh ids. The current step is
    /// not changed.
    pub fn duplicate_step(&mut self, step_id: &StepId) -> Option<StepId> {
        let ids = &mut self.ids;
        let Some(source) = self.template.step(step_id) else {
            trace!(step_id = %step_id, "duplicate_step: no such step");
            return None;
        };
        let copy = source.duplicate(StepId::new(ids.next_id()), || ElementId::new(ids.next_id()));
        let copy_id = copy.id().clone();

        let order = self.template.push_step(copy);
        self.touch();
        debug!(source = %step_id, step_id = %copy_id, order, "step duplicated");
        Some(copy_id)
    }

    /// Move a step from one position to another (splice semantics).
    ///
    /// Nothing happens when `old_index` is out of range or the step would not
    /// move. A `new_index` past the end moves the step to the end.
    pub fn reorder_steps(&mut self, old_index: usize, new_index: usize) -> Outcome {
        if !self.template.move_step(old_index, new_index) {
            trace!(from = old_index, to = new_index, "reorder_steps: nothing to move");
            return Outcome::Unchanged;
        }
        self.touch();
        debug!(from = old_index, to = new_index, "steps reordered");
        Outcome::Applied
    }

    // ========================================================================
    // Elements
    // ========================================================================

    /// Append a new element with catalog defaults to a step
    pub fn add_element(&mut self, element_type: ElementType, step_id: &StepId) -> Option<ElementId> {
        let Some(step) = self.template.step_mut(step_id) else {
            trace!(step_id = %step_id, "add_element: no such step");
            return None;
        };
        let element_id = ElementId::new(self.ids.next_id());
        step.push_element(Element::new(element_id.clone(), element_type));
        self.touch();
        debug!(step_id = %step_id, element_id = %element_id, element_type = %element_type, "element added");
        Some(element_id)
    }

    /// Merge a patch into an element of the current step.
    ///
    /// Only the current step is searched. Fields absent from the patch keep
    /// their value. An empty patch changes nothing.
    pub fn update_element(&mut self, element_id: &ElementId, patch: ElementPatch) -> Outcome {
        let Some(element) = self.current_element_mut(element_id) else {
            trace!(element_id = %element_id, "update_element: not in current step");
            return Outcome::Unchanged;
        };
        if !element.apply_patch(patch) {
            return Outcome::Unchanged;
        }
        self.touch();
        debug!(element_id = %element_id, "element updated");
        Outcome::Applied
    }

    /// Remove an element from the current step
    pub fn delete_element(&mut self, element_id: &ElementId) -> Outcome {
        let removed = match self.current_step_id.clone() {
            Some(step_id) => self
                .template
                .step_mut(&step_id)
                .and_then(|step| step.remove_element(element_id)),
            None => None,
        };
        if removed.is_none() {
            trace!(element_id = %element_id, "delete_element: not in current step");
            return Outcome::Unchanged;
        }
        self.touch();
        debug!(element_id = %element_id, "element deleted");
        Outcome::Applied
    }

    /// Move an element within one step (splice semantics)
    pub fn reorder_elements(&mut self, step_id: &StepId, old_index: usize, new_index: usize) -> Outcome {
        let moved = self
            .template
            .step_mut(step_id)
            .map(|step| step.move_element(old_index, new_index))
            .unwrap_or(false);
        if !moved {
            trace!(step_id = %step_id, from = old_index, to = new_index, "reorder_elements: nothing to move");
            return Outcome::Unchanged;
        }
        self.touch();
        debug!(step_id = %step_id, from = old_index, to = new_index, "elements reordered");
        Outcome::Applied
    }

    fn current_element_mut(&mut self, element_id: &ElementId) -> Option<&mut Element> {
        let step_id = self.current_step_id.as_ref()?;
        self.template.step_mut(step_id)?.element_mut(element_id)
    }

    // ========================================================================
    // UI flags
    // ========================================================================

    /// Flip preview mode, returning the new value
    pub fn toggle_preview(&mut self) -> bool {
        self.ui.toggle_preview()
    }

    pub fn open_steps_modal(&mut self) {
        self.ui.open_steps_modal();
    }

    pub fn close_steps_modal(&mut self) {
        self.ui.close_steps_modal();
    }

    // ========================================================================
    // Snapshot / export
    // ========================================================================

    /// Independent copy of the current document
    pub fn snapshot(&self) -> Template {
        self.template.clone()
    }

    /// JSON form of the current document
    pub fn export_json(&self) -> Result<String> {
        let json = if self.settings.pretty_export {
            serde_json::to_string_pretty(&self.template)?
        } else {
            serde_json::to_string(&self.template)?
        };
        Ok(json)
    }

    /// Stamp the document as modified and hand back its JSON for persisting
    pub fn save(&mut self) -> Result<SaveReport> {
        self.touch();
        let json = self.export_json()?;
        debug!(template_id = %self.template.id(), bytes = json.len(), "template saved");
        Ok(SaveReport {
            template_id: self.template.id().clone(),
            saved_at: self.template.updated_at(),
            json,
        })
    }

    fn touch(&mut self) {
        let now = self.clock.now();
        self.template.touch(now);
    }
}

fn fresh_template(settings: &BuilderSettings, ids: &mut impl IdProvider, clock: &impl Clock) -> Template {
    let now = clock.now();
    let template_id = TemplateId::new(ids.next_id());
    let first_step = Step::new(StepId::new(ids.next_id()), Step::default_title(1));
    Template::new(
        template_id,
        settings.template_name.clone(),
        Some(settings.template_description.clone()),
        first_step,
        now,
    )
}
