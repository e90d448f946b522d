//! Problems reported for individual question records.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::validator::MC_CHOICE_COUNT;

/// One schema failure found in one record.
///
/// `Display` renders the human-readable message, always prefixed with the
/// record position (`Item #3 ...`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Problem {
    /// Zero-based position of the record in the document.
    pub index: usize,
    #[serde(flatten)]
    pub kind: ProblemKind,
}

/// What went wrong with a record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProblemKind {
    /// The record is not a JSON object.
    NotAnObject,
    /// A base required field is absent.
    MissingField { field: &'static str },
    /// A field that must hold text holds something else.
    NotAString { field: &'static str },
    /// An `mc` record has no `choices` field.
    MissingChoices,
    /// `choices` is present but not an array.
    ChoicesNotAList,
    /// `choices` does not hold exactly [`MC_CHOICE_COUNT`] distinct values.
    WrongChoiceCount { unique: Vec<Value> },
    /// `answer` is not one of the original `choices`.
    AnswerNotInChoices { answer: Value, choices: Vec<Value> },
}

impl Problem {
    #[must_use]
    pub const fn new(index: usize, kind: ProblemKind) -> Self {
        Self { index, kind }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let index = self.index;
        match &self.kind {
            ProblemKind::NotAnObject => write!(f, "Item #{index} is not an object."),
            ProblemKind::MissingField { field } => {
                write!(f, "Item #{index} missing required field: '{field}'.")
            }
            ProblemKind::NotAString { field } => {
                write!(f, "Item #{index} field '{field}' must be a string.")
            }
            ProblemKind::MissingChoices => write!(f, "Item #{index} is mc but missing 'choices'."),
            ProblemKind::ChoicesNotAList => write!(f, "Item #{index} 'choices' must be a list."),
            ProblemKind::WrongChoiceCount { unique } => {
                write!(
                    f,
                    "Item #{index} must have exactly {MC_CHOICE_COUNT} unique choices, got "
                )?;
                write_list(f, unique)?;
                write!(f, " ({}).", unique.len())
            }
            ProblemKind::AnswerNotInChoices { answer, choices } => {
                write!(f, "Item #{index} answer '")?;
                match answer {
                    Value::String(text) => f.write_str(text)?,
                    other => write!(f, "{other}")?,
                }
                f.write_str("' is not in choices ")?;
                write_list(f, choices)?;
                f.write_str(".")
            }
        }
    }
}

/// Compact JSON rendering of a value list, e.g. `["1","2"]`.
fn write_list(f: &mut fmt::Formatter<'_>, values: &[Value]) -> fmt::Result {
    f.write_str("[")?;
    for (position, value) in values.iter().enumerate() {
        if position > 0 {
            f.write_str(",")?;
        }
        write!(f, "{value}")?;
    }
    f.write_str("]")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn messages_name_the_record_position() {
        let cases = [
            (ProblemKind::NotAnObject, "Item #0 is not an object."),
            (
                ProblemKind::MissingField { field: "answer" },
                "Item #0 missing required field: 'answer'.",
            ),
            (
                ProblemKind::NotAString { field: "type" },
                "Item #0 field 'type' must be a string.",
            ),
            (ProblemKind::MissingChoices, "Item #0 is mc but missing 'choices'."),
            (ProblemKind::ChoicesNotAList, "Item #0 'choices' must be a list."),
        ];
        for (kind, expected) in cases {
            assert_eq!(Problem::new(0, kind).to_string(), expected);
        }
    }

    #[test]
    fn choice_count_message_lists_distinct_values() {
        let problem = Problem::new(
            3,
            ProblemKind::WrongChoiceCount {
                unique: vec![json!("4")],
            },
        );
        assert_eq!(
            problem.to_string(),
            r#"Item #3 must have exactly 4 unique choices, got ["4"] (1)."#
        );
    }

    #[test]
    fn string_answer_is_rendered_without_quotes() {
        let problem = Problem::new(
            1,
            ProblemKind::AnswerNotInChoices {
                answer: json!("5"),
                choices: vec![json!("1"), json!("2"), json!("3"), json!("4")],
            },
        );
        assert_eq!(
            problem.to_string(),
            r#"Item #1 answer '5' is not in choices ["1","2","3","4"]."#
        );
    }

    #[test]
    fn non_string_answer_is_rendered_as_json() {
        let problem = Problem::new(
            2,
            ProblemKind::AnswerNotInChoices {
                answer: json!({"n": 1}),
                choices: vec![],
            },
        );
        assert_eq!(
            problem.to_string(),
            r#"Item #2 answer '{"n":1}' is not in choices []."#
        );
    }

    #[test]
    fn serializes_with_kind_tag() {
        let problem = Problem::new(4, ProblemKind::MissingField { field: "text" });
        let value = serde_json::to_value(&problem).expect("problem serializes");
        assert_eq!(
            value,
            json!({"index": 4, "kind": "missing_field", "field": "text"})
        );
    }

    #[test]
    fn unit_kinds_serialize_with_only_the_tag() {
        let problem = Problem::new(0, ProblemKind::NotAnObject);
        let value = serde_json::to_value(&problem).expect("problem serializes");
        assert_eq!(value, json!({"index": 0, "kind": "not_an_object"}));
    }
}
