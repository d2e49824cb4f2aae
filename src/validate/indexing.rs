//! Level 3: identifier uniqueness and format, start/end event presence.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Level, ValidationIssue, codes};
use crate::parse::{ElementIndex, local_name};
use crate::result::ValidationResult;

static ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("static id pattern"));

pub fn check(index: &ElementIndex<'_, '_>, mut result: ValidationResult) -> ValidationResult {
    result.element_counts = index.counts.clone();

    for dup in &index.duplicates {
        result.add(
            ValidationIssue::error(
                Level::Index,
                codes::DUPLICATE_ID,
                format!("Duplicate ID '{}'", dup.id),
            )
            .with_element(dup.id, local_name(dup.node))
            .with_suggestion("Rename the element so every id is unique"),
        );
    }

    for (id, node) in index.elements() {
        if !ID_PATTERN.is_match(id) {
            result.add(
                ValidationIssue::warning(
                    Level::Index,
                    codes::INVALID_ID_FORMAT,
                    format!(
                        "ID '{}' should contain only letters, digits, hyphens and underscores",
                        id
                    ),
                )
                .with_element(id, local_name(node))
                .with_suggestion("Replace whitespace and punctuation with '_'"),
            );
        }
    }

    if index.count("startEvent") == 0 {
        result.add(
            ValidationIssue::error(Level::Index, codes::NO_START_EVENT, "Process has no start event")
                .with_suggestion("Add a <bpmn:startEvent> and connect it to the first activity"),
        );
    }

    if index.count("endEvent") == 0 {
        result.add(
            ValidationIssue::error(Level::Index, codes::NO_END_EVENT, "Process has no end event")
                .with_suggestion("Add a <bpmn:endEvent> after the last activity"),
        );
    }

    result
}
