use super::Condition;
use crate::error::ConditionError;
use crate::schema::{FieldValue, FieldValues};

impl Condition {
    /// Evaluates the condition against the node's current field values.
    ///
    /// `All` and `Any` short-circuit, so a missing field behind a decided operand is not reported.
    pub fn evaluate(&self, values: &FieldValues) -> Result<bool, ConditionError> {
        match self {
            Condition::IsTruthy { depends_on } => Ok(lookup(values, depends_on)?.is_truthy()),
            Condition::IsFalsy { depends_on } => Ok(!lookup(values, depends_on)?.is_truthy()),
            Condition::Equals { depends_on, value } => Ok(lookup(values, depends_on)? == value),
            Condition::Not { condition } => Ok(!condition.evaluate(values)?),
            Condition::All { conditions } => {
                for c in conditions {
                    if !c.evaluate(values)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Condition::Any { conditions } => {
                for c in conditions {
                    if c.evaluate(values)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
        }
    }
}

fn lookup<'a>(values: &'a FieldValues, field: &str) -> Result<&'a FieldValue, ConditionError> {
    values
        .get(field)
        .ok_or_else(|| ConditionError::FieldNotFound(field.to_string()))
}
