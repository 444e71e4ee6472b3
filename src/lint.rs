//! Static checks for hand-authored templates.
//!
//! Templates are plain data and nothing stops a provider from returning a malformed one. The
//! lint pass finds those authoring defects before an editor or executor trips over them.
use crate::error::SchemaError;
use crate::schema::{FieldSpec, FieldType, NodeTemplate, WidgetKind};
use itertools::Itertools;
use std::collections::HashSet;

/// Collects every defect in `template`. An empty vector means the template is well formed.
pub fn lint_template(template: &NodeTemplate) -> Vec<SchemaError> {
    let mut errors = Vec::new();

    if template.task_name.trim().is_empty() {
        errors.push(SchemaError::EmptyTaskName);
    }

    for name in template.field_names().duplicates() {
        errors.push(SchemaError::DuplicateField(name.to_string()));
    }

    let known: HashSet<&str> = template.field_names().collect();
    for field in &template.fields {
        if field.name.trim().is_empty() {
            errors.push(SchemaError::EmptyFieldName {
                task_name: template.task_name.clone(),
            });
        }
        lint_value(field, &mut errors);
        lint_options(field, &mut errors);
        lint_condition(field, &known, &mut errors);
    }

    errors
}

fn lint_value(field: &FieldSpec, errors: &mut Vec<SchemaError>) {
    if !field.value_type.accepts(&field.value) {
        errors.push(SchemaError::DefaultTypeMismatch {
            field: field.name.clone(),
            field_type: field.value_type,
            value: field.value.clone(),
        });
    }
    if field.widget == WidgetKind::Checkbox && field.value_type != FieldType::Bool {
        errors.push(SchemaError::CheckboxNotBool {
            field: field.name.clone(),
            field_type: field.value_type,
        });
    }
}

fn lint_options(field: &FieldSpec, errors: &mut Vec<SchemaError>) {
    let options = match (&field.options, field.widget) {
        (None, WidgetKind::Select) => {
            errors.push(SchemaError::MissingOptions(field.name.clone()));
            return;
        }
        (None, _) => return,
        (Some(_), widget) if widget != WidgetKind::Select => {
            errors.push(SchemaError::OptionsOnNonSelect {
                field: field.name.clone(),
                widget,
            });
            return;
        }
        (Some(options), _) => options,
    };

    if options.is_empty() {
        errors.push(SchemaError::MissingOptions(field.name.clone()));
        return;
    }

    for option in options {
        if !field.value_type.accepts(&option.value) {
            errors.push(SchemaError::OptionTypeMismatch {
                field: field.name.clone(),
                field_type: field.value_type,
                value: option.value.clone(),
            });
        }
        if option.label.trim().is_empty() {
            errors.push(SchemaError::EmptyOptionLabel {
                field: field.name.clone(),
                value: option.value.clone(),
            });
        }
    }

    if !field.allows_option(&field.value) {
        errors.push(SchemaError::DefaultNotInOptions {
            field: field.name.clone(),
            value: field.value.clone(),
        });
    }
}

fn lint_condition(field: &FieldSpec, known: &HashSet<&str>, errors: &mut Vec<SchemaError>) {
    let Some(condition) = &field.condition else {
        return;
    };

    let mut referenced = HashSet::new();
    condition.referenced_fields(&mut referenced);

    // Sorted so repeated lint runs report in a stable order.
    for name in referenced.into_iter().sorted() {
        if name == field.name {
            errors.push(SchemaError::SelfReferencingCondition(field.name.clone()));
        } else if !known.contains(name.as_str()) {
            errors.push(SchemaError::DanglingCondition {
                field: field.name.clone(),
                missing: name,
            });
        }
    }
}
