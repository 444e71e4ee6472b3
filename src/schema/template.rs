use super::FieldSpec;
use crate::error::{RegistryError, SchemaError};
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fs;

/// The field schema of one workflow node type.
///
/// Fields keep their declaration order, which is also the order the editor renders them in.
/// On the wire `template` is a JSON object keyed by field name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeTemplate {
    pub description: String,
    pub task_name: String,
    pub has_inputs: bool,
    #[serde(
        rename = "template",
        serialize_with = "serialize_fields",
        deserialize_with = "deserialize_fields"
    )]
    pub fields: Vec<FieldSpec>,
}

impl NodeTemplate {
    pub fn new(
        task_name: impl Into<String>,
        description: impl Into<String>,
        has_inputs: bool,
    ) -> Self {
        Self {
            description: description.into(),
            task_name: task_name.into(),
            has_inputs,
            fields: Vec::new(),
        }
    }

    /// Appends a field, keeping declaration order.
    pub fn with_field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn contains_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Fields passed to the backend task as parameters.
    pub fn parameters(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| !f.is_output)
    }

    /// Fields the backend task fills in with its results.
    pub fn outputs(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.is_output)
    }

    /// Runs the lint pass and returns the first defect found, if any.
    pub fn validate(&self) -> Result<(), SchemaError> {
        match crate::lint::lint_template(self).into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parses a template from JSON. No lint is applied.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load a template from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, RegistryError> {
        let content = fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_string(),
            source,
        })?;
        Ok(Self::from_json(&content)?)
    }
}

fn serialize_fields<S: Serializer>(fields: &[FieldSpec], serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(fields.len()))?;
    for field in fields {
        map.serialize_entry(&field.name, field)?;
    }
    map.end()
}

fn deserialize_fields<'de, D>(deserializer: D) -> Result<Vec<FieldSpec>, D::Error>
where
    D: Deserializer<'de>,
{
    struct FieldsVisitor;

    impl<'de> Visitor<'de> for FieldsVisitor {
        type Value = Vec<FieldSpec>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of field name to field spec")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut fields = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((key, field)) = access.next_entry::<String, FieldSpec>()? {
                if key != field.name {
                    return Err(de::Error::custom(format!(
                        "field keyed '{}' declares name '{}'",
                        key, field.name
                    )));
                }
                fields.push(field);
            }
            Ok(fields)
        }
    }

    deserializer.deserialize_map(FieldsVisitor)
}
