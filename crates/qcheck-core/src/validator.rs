//! Per-record schema validation.
//!
//! A record passes through three gates:
//! 1. it must be an object,
//! 2. the base fields must all be present (a record missing any of them gets
//!    only the missing-field problems),
//! 3. field types and the multiple-choice rules are then checked
//!    independently, so every detectable problem is reported at once.

use serde_json::{Map, Value};

use crate::equality::{distinct, values_equal};
use crate::problem::{Problem, ProblemKind};

/// Fields every record must carry, in reporting order.
pub const REQUIRED_FIELDS: [&str; 3] = ["type", "text", "answer"];

/// `type` value of a multiple-choice question.
pub const MC_TYPE: &str = "mc";

/// Number of distinct choices a multiple-choice question must offer.
pub const MC_CHOICE_COUNT: usize = 4;

/// Validate one record at position `index`. An empty result means the record
/// is valid.
#[must_use]
pub fn validate(record: &Value, index: usize) -> Vec<Problem> {
    let Some(fields) = record.as_object() else {
        return vec![Problem::new(index, ProblemKind::NotAnObject)];
    };

    let (Some(kind), Some(text), Some(answer)) =
        (fields.get("type"), fields.get("text"), fields.get("answer"))
    else {
        return REQUIRED_FIELDS
            .iter()
            .filter(|field| !fields.contains_key(**field))
            .map(|&field| Problem::new(index, ProblemKind::MissingField { field }))
            .collect();
    };

    let mut problems = Vec::new();

    if !kind.is_string() {
        problems.push(Problem::new(
            index,
            ProblemKind::NotAString { field: "type" },
        ));
    }
    if !text.is_string() {
        problems.push(Problem::new(
            index,
            ProblemKind::NotAString { field: "text" },
        ));
    }

    if kind.as_str() == Some(MC_TYPE) {
        check_choices(fields, answer, index, &mut problems);
    }

    problems
}

/// Validate every record of a document, in order.
#[must_use]
pub fn validate_document(records: &[Value]) -> Vec<Problem> {
    records
        .iter()
        .enumerate()
        .flat_map(|(index, record)| validate(record, index))
        .collect()
}

fn check_choices(
    fields: &Map<String, Value>,
    answer: &Value,
    index: usize,
    problems: &mut Vec<Problem>,
) {
    let Some(choices) = fields.get("choices") else {
        problems.push(Problem::new(index, ProblemKind::MissingChoices));
        return;
    };
    let Some(choices) = choices.as_array() else {
        problems.push(Problem::new(index, ProblemKind::ChoicesNotAList));
        return;
    };

    let unique = distinct(choices);
    if unique.len() != MC_CHOICE_COUNT {
        problems.push(Problem::new(
            index,
            ProblemKind::WrongChoiceCount {
                unique: unique.into_iter().cloned().collect(),
            },
        ));
    }

    // Membership is checked against the original list, duplicates included.
    if !choices.iter().any(|choice| values_equal(choice, answer)) {
        problems.push(Problem::new(
            index,
            ProblemKind::AnswerNotInChoices {
                answer: answer.clone(),
                choices: choices.clone(),
            },
        ));
    }
}
