use crate::schema::FieldValue;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A predicate over a node's current field values deciding whether a field is relevant.
///
/// Serialized as a tagged object, e.g.
/// `{"predicate": "is_truthy", "depends_on": "download_video"}`, so it can travel with the
/// template across process boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "predicate", rename_all = "snake_case")]
pub enum Condition {
    IsTruthy {
        depends_on: String,
    },
    IsFalsy {
        depends_on: String,
    },
    Equals {
        depends_on: String,
        value: FieldValue,
    },
    Not {
        condition: Box<Condition>,
    },
    All {
        conditions: Vec<Condition>,
    },
    Any {
        conditions: Vec<Condition>,
    },
}

impl Condition {
    pub fn truthy(field: impl Into<String>) -> Self {
        Condition::IsTruthy {
            depends_on: field.into(),
        }
    }

    pub fn falsy(field: impl Into<String>) -> Self {
        Condition::IsFalsy {
            depends_on: field.into(),
        }
    }

    pub fn equals(field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Condition::Equals {
            depends_on: field.into(),
            value: value.into(),
        }
    }

    pub fn negate(condition: Condition) -> Self {
        Condition::Not {
            condition: Box::new(condition),
        }
    }

    pub fn all(conditions: Vec<Condition>) -> Self {
        Condition::All { conditions }
    }

    pub fn any(conditions: Vec<Condition>) -> Self {
        Condition::Any { conditions }
    }

    /// Collects the names of every field this condition reads.
    pub fn referenced_fields(&self, fields: &mut HashSet<String>) {
        match self {
            Condition::IsTruthy { depends_on }
            | Condition::IsFalsy { depends_on }
            | Condition::Equals { depends_on, .. } => {
                fields.insert(depends_on.clone());
            }
            Condition::Not { condition } => condition.referenced_fields(fields),
            Condition::All { conditions } | Condition::Any { conditions } => {
                for c in conditions {
                    c.referenced_fields(fields);
                }
            }
        }
    }

    /// Binding strength used when rendering nested conditions.
    pub(super) fn precedence(&self) -> u8 {
        match self {
            Condition::Any { conditions } | Condition::All { conditions } => match conditions
                .as_slice()
            {
                [] => 5,
                [single] => single.precedence(),
                _ if matches!(self, Condition::Any { .. }) => 1,
                _ => 2,
            },
            Condition::Equals { .. } => 3,
            Condition::Not { .. } | Condition::IsFalsy { .. } => 4,
            Condition::IsTruthy { .. } => 5,
        }
    }
}
