use crate::schema::{FieldType, FieldValue, WidgetKind};
use thiserror::Error;

/// Authoring defects found by the schema lint pass.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    #[error("Template has an empty task name")]
    EmptyTaskName,

    #[error("Template '{task_name}' contains a field with an empty name")]
    EmptyFieldName { task_name: String },

    #[error("Field '{0}' is declared more than once")]
    DuplicateField(String),

    #[error("Field '{field}' has default value '{value}', which is not a valid '{field_type}'")]
    DefaultTypeMismatch {
        field: String,
        field_type: FieldType,
        value: FieldValue,
    },

    #[error("Field '{field}' declares options, but its widget is '{widget}' instead of 'select'")]
    OptionsOnNonSelect { field: String, widget: WidgetKind },

    #[error("Select field '{0}' declares no options")]
    MissingOptions(String),

    #[error("Option '{value}' of field '{field}' is not a valid '{field_type}'")]
    OptionTypeMismatch {
        field: String,
        field_type: FieldType,
        value: FieldValue,
    },

    #[error("Option '{value}' of field '{field}' has an empty label")]
    EmptyOptionLabel { field: String, value: FieldValue },

    #[error("Default value '{value}' of select field '{field}' is not one of its options")]
    DefaultNotInOptions { field: String, value: FieldValue },

    #[error("Checkbox field '{field}' must be of type 'bool', found '{field_type}'")]
    CheckboxNotBool { field: String, field_type: FieldType },

    #[error("Condition on field '{field}' references unknown field '{missing}'")]
    DanglingCondition { field: String, missing: String },

    #[error("Condition on field '{0}' references the field itself")]
    SelfReferencingCondition(String),
}

/// Errors raised while evaluating a field condition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConditionError {
    #[error("Field '{0}' not found in the provided field values")]
    FieldNotFound(String),
}

/// Errors that can occur while building or querying a template registry.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Task '{0}' is registered more than once")]
    DuplicateTask(String),

    #[error("Template for task '{task_name}' is invalid: {source}")]
    InvalidTemplate {
        task_name: String,
        #[source]
        source: SchemaError,
    },

    #[error("No template is registered for task '{0}'")]
    UnknownTask(String),

    #[error("Could not read template file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse template JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised by a node instance while editing values, submitting, or recording results.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstanceError {
    #[error("Node '{task_name}' has no field named '{field}'")]
    UnknownField { task_name: String, field: String },

    #[error("Field '{field}' expects a '{expected}' value, but received '{found}'")]
    TypeMismatch {
        field: String,
        expected: FieldType,
        found: FieldValue,
    },

    #[error("Value '{value}' is not one of the options of field '{field}'")]
    InvalidOption { field: String, value: FieldValue },

    #[error("Field '{0}' is a task parameter, not an output slot")]
    NotAnOutput(String),

    #[error("Required field '{0}' is empty")]
    MissingRequired(String),

    #[error("Required output '{0}' was not produced by the task")]
    MissingOutput(String),

    #[error(transparent)]
    Condition(#[from] ConditionError),
}
