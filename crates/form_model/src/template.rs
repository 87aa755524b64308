//! Template root document and step-list operations

use crate::step::move_item;
use crate::{Element, ElementId, FormModelError, Result, Step, StepId, TemplateId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The root document: an ordered, never-empty list of steps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    id: TemplateId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    steps: Vec<Step>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Template {
    /// Create a template holding a single first step
    pub fn new(
        id: TemplateId,
        name: impl Into<String>,
        description: Option<String>,
        first_step: Step,
        now: DateTime<Utc>,
    ) -> Self {
        let mut template = Self {
            id,
            name: name.into(),
            description,
            steps: vec![first_step],
            created_at: now,
            updated_at: now,
        };
        template.renumber_steps();
        template
    }

    pub fn id(&self) -> &TemplateId {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Record a modification time
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// The first step. Present for every template that passes [`Template::validate`].
    pub fn first_step(&self) -> Option<&Step> {
        self.steps.first()
    }

    pub fn step(&self, id: &StepId) -> Option<&Step> {
        self.steps.iter().find(|s| s.id() == id)
    }

    pub fn step_mut(&mut self, id: &StepId) -> Option<&mut Step> {
        self.steps.iter_mut().find(|s| s.id() == id)
    }

    pub fn step_index(&self, id: &StepId) -> Option<usize> {
        self.steps.iter().position(|s| s.id() == id)
    }

    /// Find an element anywhere in the document, with the step holding it
    pub fn find_element(&self, id: &ElementId) -> Option<(&Step, &Element)> {
        self.steps
            .iter()
            .find_map(|step| step.element(id).map(|el| (step, el)))
    }

    /// Append a step, returning the order it was given
    pub fn push_step(&mut self, mut step: Step) -> u32 {
        let order = self.steps.len() as u32 + 1;
        step.set_order(order);
        self.steps.push(step);
        order
    }

    /// Remove a step by id and renumber the rest.
    ///
    /// Fails with [`FormModelError::LastStep`] whenever only one step is left,
    /// whether or not the id matches. Returns `Ok(None)` if no step has the id.
    pub fn remove_step(&mut self, id: &StepId) -> Result<Option<Step>> {
        if self.steps.len() <= 1 {
            return Err(FormModelError::LastStep);
        }
        let Some(index) = self.step_index(id) else {
            return Ok(None);
        };
        let removed = self.steps.remove(index);
        self.renumber_steps();
        Ok(Some(removed))
    }

    /// Splice-move a step from one position to another and renumber.
    ///
    /// Returns false, without renumbering, when nothing moved.
    pub fn move_step(&mut self, from: usize, to: usize) -> bool {
        if !move_item(&mut self.steps, from, to) {
            return false;
        }
        self.renumber_steps();
        true
    }

    fn renumber_steps(&mut self) {
        for (index, step) in self.steps.iter_mut().enumerate() {
            step.set_order(index as u32 + 1);
        }
    }

    /// Check the structural invariants of a template that did not come from
    /// the engine, such as one read back from a snapshot.
    pub fn validate(&self) -> Result<()> {
        if self.steps.is_empty() {
            return Err(FormModelError::EmptyTemplate);
        }

        let mut seen = HashSet::new();
        for (index, step) in self.steps.iter().enumerate() {
            let expected = index as u32 + 1;
            if step.order() != expected {
                return Err(FormModelError::OrderMismatch {
                    step_id: step.id().clone(),
                    expected,
                    found: step.order(),
                });
            }
            if !seen.insert(step.id().as_str()) {
                return Err(FormModelError::DuplicateId(step.id().to_string()));
            }
            for element in step.elements() {
                if !seen.insert(element.id().as_str()) {
                    return Err(FormModelError::DuplicateId(element.id().to_string()));
                }
            }
        }
        Ok(())
    }
}

/// Resolve the current step by looking its id up in the live step list.
///
/// Yields `None` when no step is selected or the selected step no longer exists.
pub fn resolve_current_step<'a>(template: &'a Template, current: Option<&StepId>) -> Option<&'a Step> {
    current.and_then(|id| template.step(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ElementType;
    use chrono::TimeZone;
    use serde_json::json;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    fn template_with_steps(n: usize) -> Template {
        let mut template = Template::new(
            TemplateId::new("t"),
            "New Form Template",
            Some(String::new()),
            Step::new(StepId::new("s1"), "Step 1"),
            at(0),
        );
        for i in 2..=n {
            template.push_step(Step::new(StepId::new(format!("s{}", i)), Step::default_title(i)));
        }
        template
    }

    fn orders(template: &Template) -> Vec<u32> {
        template.steps().iter().map(|s| s.order()).collect()
    }

    fn step_ids(template: &Template) -> Vec<&str> {
        template.steps().iter().map(|s| s.id().as_str()).collect()
    }

    #[test]
    fn test_new_template_has_one_ordered_step() {
        let template = template_with_steps(1);
        assert_eq!(template.step_count(), 1);
        assert_eq!(template.first_step().unwrap().order(), 1);
        assert_eq!(template.created_at(), template.updated_at());
    }

    #[test]
    fn test_push_assigns_order() {
        let template = template_with_steps(3);
        assert_eq!(orders(&template), vec![1, 2, 3]);
    }

    #[test]
    fn test_remove_middle_renumbers() {
        let mut template = template_with_steps(3);
        let removed = template.remove_step(&StepId::new("s2")).unwrap();

        assert_eq!(removed.unwrap().id().as_str(), "s2");
        assert_eq!(step_ids(&template), vec!["s1", "s3"]);
        assert_eq!(orders(&template), vec![1, 2]);
    }

    #[test]
    fn test_remove_last_step_refused() {
        let mut template = template_with_steps(1);
        let before = template.clone();

        assert_eq!(template.remove_step(&StepId::new("s1")), Err(FormModelError::LastStep));
        assert_eq!(template.remove_step(&StepId::new("nope")), Err(FormModelError::LastStep));
        assert_eq!(template, before);
    }

    #[test]
    fn test_remove_missing_step() {
        let mut template = template_with_steps(2);
        assert_eq!(template.remove_step(&StepId::new("nope")), Ok(None));
        assert_eq!(template.step_count(), 2);
    }

    #[test]
    fn test_move_step_renumbers() {
        let mut template = template_with_steps(3);
        assert!(template.move_step(2, 0));
        assert_eq!(step_ids(&template), vec!["s3", "s1", "s2"]);
        assert_eq!(orders(&template), vec![1, 2, 3]);
    }

    #[test]
    fn test_move_step_noop() {
        let mut template = template_with_steps(3);
        assert!(!template.move_step(1, 1));
        assert!(!template.move_step(3, 0));
        assert_eq!(step_ids(&template), vec!["s1", "s2", "s3"]);
    }

    #[test]
    fn test_find_element_across_steps() {
        let mut template = template_with_steps(2);
        template
            .step_mut(&StepId::new("s2"))
            .unwrap()
            .push_element(Element::new(ElementId::new("e1"), ElementType::Checkbox));

        let (step, el) = template.find_element(&ElementId::new("e1")).unwrap();
        assert_eq!(step.id().as_str(), "s2");
        assert_eq!(el.element_type(), ElementType::Checkbox);
        assert!(template.find_element(&ElementId::new("e2")).is_none());
    }

    #[test]
    fn test_resolve_current_step() {
        let mut template = template_with_steps(2);
        let s2 = StepId::new("s2");

        assert_eq!(resolve_current_step(&template, Some(&s2)).unwrap().id(), &s2);
        assert!(resolve_current_step(&template, None).is_none());

        template.remove_step(&s2).unwrap();
        assert!(resolve_current_step(&template, Some(&s2)).is_none());
    }

    #[test]
    fn test_validate_accepts_well_formed() {
        assert_eq!(template_with_steps(3).validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_bad_documents() {
        let mut value = serde_json::to_value(template_with_steps(2)).unwrap();
        value["steps"][1]["order"] = json!(5);
        let bad_order: Template = serde_json::from_value(value).unwrap();
        assert!(matches!(
            bad_order.validate(),
            Err(FormModelError::OrderMismatch { expected: 2, found: 5, .. })
        ));

        let mut value = serde_json::to_value(template_with_steps(2)).unwrap();
        value["steps"][1]["id"] = json!("s1");
        let dup: Template = serde_json::from_value(value).unwrap();
        assert_eq!(dup.validate(), Err(FormModelError::DuplicateId("s1".to_string())));

        let mut value = serde_json::to_value(template_with_steps(1)).unwrap();
        value["steps"] = json!([]);
        let empty: Template = serde_json::from_value(value).unwrap();
        assert_eq!(empty.validate(), Err(FormModelError::EmptyTemplate));
    }

    #[test]
    fn test_snapshot_shape() {
        let template = template_with_steps(1);
        let json = serde_json::to_value(&template).unwrap();

        assert_eq!(json["id"], json!("t"));
        assert_eq!(json["name"], json!("New Form Template"));
        assert_eq!(json["description"], json!(""));
        assert_eq!(
            json["steps"],
            json!([{ "id": "s1", "title": "Step 1", "order": 1, "elements": [] }])
        );
        assert_eq!(json["createdAt"], json!("2023-11-14T22:13:20Z"));
        assert_eq!(json["updatedAt"], json["createdAt"]);
    }
}
