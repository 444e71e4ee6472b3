use super::FieldValue;
use crate::condition::Condition;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic type tag of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    #[serde(rename = "str")]
    Str,
    #[serde(rename = "bool")]
    Bool,
    /// Either a string or a string-to-string mapping, decided at runtime.
    #[serde(rename = "str|dict")]
    StrOrDict,
}

impl FieldType {
    /// Whether `value` has a shape this type allows.
    pub fn accepts(&self, value: &FieldValue) -> bool {
        matches!(
            (self, value),
            (FieldType::Str, FieldValue::Str(_))
                | (FieldType::Bool, FieldValue::Bool(_))
                | (FieldType::StrOrDict, FieldValue::Str(_) | FieldValue::Dict(_))
        )
    }

    /// The zero value used when a template does not declare a default.
    pub fn default_value(&self) -> FieldValue {
        match self {
            FieldType::Bool => FieldValue::Bool(false),
            FieldType::Str | FieldType::StrOrDict => FieldValue::empty_str(),
        }
    }

    /// Parses text typed for a field of this type.
    ///
    /// A `str` field takes the text verbatim, so `"true"` stays a string. Text that does
    /// not fit the type comes back as a string and is rejected by the type check.
    pub fn parse_value(&self, raw: &str) -> FieldValue {
        match (self, FieldValue::parse_loose(raw)) {
            (FieldType::Str, _) => FieldValue::Str(raw.to_string()),
            (FieldType::StrOrDict, FieldValue::Bool(_)) => FieldValue::Str(raw.to_string()),
            (_, value) => value,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Str => "str",
            FieldType::Bool => "bool",
            FieldType::StrOrDict => "str|dict",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The form control the editor renders for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetKind {
    Input,
    Checkbox,
    Select,
    Textarea,
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WidgetKind::Input => "input",
            WidgetKind::Checkbox => "checkbox",
            WidgetKind::Select => "select",
            WidgetKind::Textarea => "textarea",
        };
        f.write_str(name)
    }
}

/// One entry of a select widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: FieldValue,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<FieldValue>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Describes one form field / node port of a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub display_name: String,
    #[serde(rename = "type")]
    pub value_type: FieldType,
    pub value: FieldValue,
    pub required: bool,
    #[serde(default)]
    pub placeholder: String,
    pub show: bool,
    pub clear_after_run: bool,
    pub list: bool,
    #[serde(rename = "field_type")]
    pub widget: WidgetKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<SelectOption>>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_output: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
}

impl FieldSpec {
    /// Creates a hidden, optional field that is cleared after each run.
    ///
    /// The display name defaults to the field name and the value to the type's zero value.
    pub fn new(name: impl Into<String>, field_type: FieldType, widget: WidgetKind) -> Self {
        let name = name.into();
        Self {
            display_name: name.clone(),
            name,
            value_type: field_type,
            value: field_type.default_value(),
            required: false,
            placeholder: String::new(),
            show: false,
            clear_after_run: true,
            list: false,
            widget,
            options: None,
            is_output: false,
            condition: None,
        }
    }

    /// A textarea output slot of type `str|dict`, required and hidden.
    pub fn output(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::StrOrDict, WidgetKind::Textarea)
            .required(true)
            .as_output()
    }

    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    pub fn default_value(mut self, value: impl Into<FieldValue>) -> Self {
        self.value = value.into();
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }

    pub fn clear_after_run(mut self, clear: bool) -> Self {
        self.clear_after_run = clear;
        self
    }

    pub fn list(mut self, list: bool) -> Self {
        self.list = list;
        self
    }

    pub fn options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = Some(options);
        self
    }

    pub fn as_output(mut self) -> Self {
        self.is_output = true;
        self
    }

    /// Makes the field relevant only while `condition` holds.
    pub fn when(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    /// Whether `value` is one of the declared options. Fields without options accept anything.
    pub fn allows_option(&self, value: &FieldValue) -> bool {
        match &self.options {
            Some(options) => options.iter().any(|o| &o.value == value),
            None => true,
        }
    }
}
