//! Per-node editing state.
//!
//! A [`NodeInstance`] holds the values a user entered for one node in a workflow graph. It is
//! shaped by, but kept apart from, the node's [`NodeTemplate`]: the template never changes,
//! while the instance is edited, submitted and filled with task results.
use crate::error::InstanceError;
use crate::schema::{FieldSpec, FieldValue, FieldValues, NodeTemplate, WidgetKind};
use ahash::AHashMap;
use log::{debug, trace};
use serde::Serialize;
use std::collections::BTreeMap;

/// The invocation handed to the backend executor: the task name plus every parameter value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskPayload {
    pub task_name: String,
    pub parameters: BTreeMap<String, FieldValue>,
}

#[derive(Debug, Clone)]
pub struct NodeInstance<'t> {
    template: &'t NodeTemplate,
    values: FieldValues,
    shown: AHashMap<String, bool>,
}

impl<'t> NodeInstance<'t> {
    /// Creates an instance holding every field's default value.
    pub fn new(template: &'t NodeTemplate) -> Self {
        let values = template
            .fields
            .iter()
            .map(|f| (f.name.clone(), f.value.clone()))
            .collect();
        let shown = template
            .fields
            .iter()
            .map(|f| (f.name.clone(), f.show))
            .collect();
        Self {
            template,
            values,
            shown,
        }
    }

    pub fn template(&self) -> &'t NodeTemplate {
        self.template
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Sets a field's value after checking it against the field's type and options.
    pub fn set_value(
        &mut self,
        name: &str,
        value: impl Into<FieldValue>,
    ) -> Result<(), InstanceError> {
        let value = value.into();
        let field = self.spec(name)?;
        check_value(field, &value)?;
        trace!("{}: {} = {}", self.template.task_name, name, value);
        self.values.insert(name.to_string(), value);
        Ok(())
    }

    /// Overrides the field's static `show` flag for this instance.
    pub fn set_shown(&mut self, name: &str, show: bool) -> Result<(), InstanceError> {
        self.spec(name)?;
        self.shown.insert(name.to_string(), show);
        Ok(())
    }

    /// Whether the field's condition holds for the current values. Fields without a
    /// condition are always relevant. The `show` flag plays no part.
    pub fn is_relevant(&self, name: &str) -> Result<bool, InstanceError> {
        let field = self.spec(name)?;
        self.field_is_relevant(field)
    }

    /// Whether the editor should draw the field: shown and relevant.
    pub fn is_visible(&self, name: &str) -> Result<bool, InstanceError> {
        let shown = self.shown.get(name).copied().unwrap_or(false);
        Ok(self.is_relevant(name)? && shown)
    }

    /// Names of the relevant fields, in template order.
    pub fn relevant_fields(&self) -> Result<Vec<&'t str>, InstanceError> {
        let template = self.template;
        let mut names = Vec::new();
        for field in &template.fields {
            if self.field_is_relevant(field)? {
                names.push(field.name.as_str());
            }
        }
        Ok(names)
    }

    /// Names of the visible fields, in template order.
    pub fn visible_fields(&self) -> Result<Vec<&'t str>, InstanceError> {
        let template = self.template;
        let mut names = Vec::new();
        for field in &template.fields {
            if self.is_visible(&field.name)? {
                names.push(field.name.as_str());
            }
        }
        Ok(names)
    }

    /// Checks that every required, relevant task parameter has a value.
    pub fn validate_submission(&self) -> Result<(), InstanceError> {
        for field in self.template.parameters() {
            if field.required && self.field_is_relevant(field)? && self.current(field).is_empty() {
                return Err(InstanceError::MissingRequired(field.name.clone()));
            }
        }
        Ok(())
    }

    /// Validates the submission and builds the backend invocation from the parameter values.
    pub fn payload(&self) -> Result<TaskPayload, InstanceError> {
        self.validate_submission()?;
        let parameters = self
            .template
            .parameters()
            .map(|f| (f.name.clone(), self.current(f).clone()))
            .collect();
        Ok(TaskPayload {
            task_name: self.template.task_name.clone(),
            parameters,
        })
    }

    /// Clears outputs flagged `clear_after_run`, so stale results are gone before a new run.
    pub fn reset_outputs(&mut self) {
        let template = self.template;
        for field in template.outputs().filter(|f| f.clear_after_run) {
            self.values.insert(field.name.clone(), field.value.clone());
        }
    }

    /// Records the results of a finished run.
    ///
    /// Every required output relevant for the run's parameters must be non-empty in `results`.
    /// An output flagged `clear_after_run` that the run did not return falls back to its
    /// default, so it never satisfies the check with a value left from an earlier run.
    ///
    /// Nothing is modified when the results are rejected. On success the results are written,
    /// missing `clear_after_run` outputs are reset, and parameters flagged `clear_after_run` go
    /// back to their defaults.
    pub fn complete_run<I>(&mut self, results: I) -> Result<(), InstanceError>
    where
        I: IntoIterator<Item = (String, FieldValue)>,
    {
        let mut accepted = FieldValues::default();
        for (name, value) in results {
            let field = self.spec(&name)?;
            if !field.is_output {
                return Err(InstanceError::NotAnOutput(name));
            }
            check_value(field, &value)?;
            accepted.insert(name, value);
        }

        let template = self.template;
        for field in template.outputs().filter(|f| f.required) {
            let produced = match accepted.get(&field.name) {
                Some(value) => value,
                None if field.clear_after_run => &field.value,
                None => self.current(field),
            };
            if produced.is_empty() && self.field_is_relevant(field)? {
                return Err(InstanceError::MissingOutput(field.name.clone()));
            }
        }

        debug!("{}: recording {} results", template.task_name, accepted.len());
        for field in template.outputs().filter(|f| f.clear_after_run) {
            if !accepted.contains_key(&field.name) {
                self.values.insert(field.name.clone(), field.value.clone());
            }
        }
        self.values.extend(accepted);
        for field in template.parameters().filter(|f| f.clear_after_run) {
            self.values.insert(field.name.clone(), field.value.clone());
        }
        Ok(())
    }

    fn spec(&self, name: &str) -> Result<&'t FieldSpec, InstanceError> {
        let template = self.template;
        template
            .field(name)
            .ok_or_else(|| InstanceError::UnknownField {
                task_name: template.task_name.clone(),
                field: name.to_string(),
            })
    }

    fn field_is_relevant(&self, field: &FieldSpec) -> Result<bool, InstanceError> {
        match &field.condition {
            Some(condition) => Ok(condition.evaluate(&self.values)?),
            None => Ok(true),
        }
    }

    fn current<'a>(&'a self, field: &'a FieldSpec) -> &'a FieldValue {
        self.values.get(&field.name).unwrap_or(&field.value)
    }
}

fn check_value(field: &FieldSpec, value: &FieldValue) -> Result<(), InstanceError> {
    if !field.value_type.accepts(value) {
        return Err(InstanceError::TypeMismatch {
            field: field.name.clone(),
            expected: field.value_type,
            found: value.clone(),
        });
    }
    if field.widget == WidgetKind::Select && !field.allows_option(value) {
        return Err(InstanceError::InvalidOption {
            field: field.name.clone(),
            value: value.clone(),
        });
    }
    Ok(())
}
