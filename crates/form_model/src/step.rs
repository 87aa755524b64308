//! Steps: ordered pages of a template

use crate::{Element, ElementId, StepId};
use serde::{Deserialize, Serialize};

/// A page or section of a form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    id: StepId,
    pub title: String,
    /// 1-based position within the owning template. Assigned by the template
    /// whenever its step list changes.
    order: u32,
    #[serde(default)]
    elements: Vec<Element>,
}

impl Step {
    /// Create an empty, detached step. Its order is assigned when it is
    /// attached to a template.
    pub fn new(id: StepId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            order: 0,
            elements: Vec::new(),
        }
    }

    /// Title given to a new step at a 1-based position
    pub fn default_title(position: usize) -> String {
        format!("Step {}", position)
    }

    pub fn id(&self) -> &StepId {
        &self.id
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    pub(crate) fn set_order(&mut self, order: u32) {
        self.order = order;
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn element(&self, id: &ElementId) -> Option<&Element> {
        self.elements.iter().find(|el| el.id() == id)
    }

    pub fn element_mut(&mut self, id: &ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|el| el.id() == id)
    }

    pub fn element_index(&self, id: &ElementId) -> Option<usize> {
        self.elements.iter().position(|el| el.id() == id)
    }

    /// Append an element
    pub fn push_element(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Remove an element by id
    pub fn remove_element(&mut self, id: &ElementId) -> Option<Element> {
        let index = self.element_index(id)?;
        Some(self.elements.remove(index))
    }

    /// Move the element at `from` to `to`. See [`move_item`].
    pub fn move_element(&mut self, from: usize, to: usize) -> bool {
        move_item(&mut self.elements, from, to)
    }

    /// Deep copy of this step under a new id, titled "{title} (Copy)".
    ///
    /// Every element is copied with an id drawn from `next_element_id`. The
    /// copy is detached; its order is assigned when it is attached.
    pub fn duplicate(&self, id: StepId, mut next_element_id: impl FnMut() -> ElementId) -> Self {
        Self {
            id,
            title: format!("{} (Copy)", self.title),
            order: 0,
            elements: self
                .elements
                .iter()
                .map(|el| el.duplicate(next_element_id()))
                .collect(),
        }
    }
}

/// Splice-move: remove the item at `from` and reinsert it at `to`.
///
/// A destination past the end moves the item to the end. Returns false and
/// leaves the list untouched when `from` is out of range or the item would
/// land where it already is.
pub(crate) fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from >= items.len() {
        return false;
    }
    let to = to.min(items.len() - 1);
    if from == to {
        return false;
    }
    let item = items.remove(from);
    items.insert(to, item);
    true
}
