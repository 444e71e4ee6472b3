use super::Condition;
use itertools::Itertools;
use std::fmt;

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_recursive(self, 0))
    }
}

/// Formats the condition, adding parentheses only where precedence demands them.
fn format_recursive(condition: &Condition, parent_precedence: u8) -> String {
    // A group with a single operand is transparent.
    if let Condition::All { conditions } | Condition::Any { conditions } = condition {
        if let [single] = conditions.as_slice() {
            return format_recursive(single, parent_precedence);
        }
    }

    let current_precedence = condition.precedence();
    let body = match condition {
        Condition::IsTruthy { depends_on } => format!("${}", depends_on),
        Condition::IsFalsy { depends_on } => format!("NOT ${}", depends_on),
        Condition::Equals { depends_on, value } => format!("${} == {}", depends_on, value),
        Condition::Not { condition } => {
            format!("NOT {}", format_recursive(condition, current_precedence + 1))
        }
        Condition::All { conditions } => join_group(conditions, "AND", "true", current_precedence),
        Condition::Any { conditions } => join_group(conditions, "OR", "false", current_precedence),
    };

    if current_precedence < parent_precedence {
        format!("({})", body)
    } else {
        body
    }
}

fn join_group(conditions: &[Condition], op: &str, empty: &str, precedence: u8) -> String {
    if conditions.is_empty() {
        return empty.to_string();
    }
    conditions
        .iter()
        .map(|c| format_recursive(c, precedence + 1))
        .join(&format!(" {} ", op))
}
