//! Per-document validation result, threaded through every level.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Level, Severity, ValidationIssue};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// True until the first error-severity issue is added.
    pub valid: bool,
    /// Issues in discovery order.
    pub issues: Vec<ValidationIssue>,
    /// Occurrences per local tag name.
    pub element_counts: BTreeMap<String, usize>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationResult {
    pub fn new() -> Self {
        ValidationResult {
            valid: true,
            issues: Vec::new(),
            element_counts: BTreeMap::new(),
        }
    }

    /// Record an issue. An error flips `valid` to false for good.
    pub fn add(&mut self, issue: ValidationIssue) {
        if issue.is_error() {
            self.valid = false;
        }
        self.issues.push(issue);
    }

    pub fn extend(&mut self, issues: impl IntoIterator<Item = ValidationIssue>) {
        for issue in issues {
            self.add(issue);
        }
    }

    fn with_severity(&self, severity: Severity) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == severity)
            .collect()
    }

    pub fn errors(&self) -> Vec<&ValidationIssue> {
        self.with_severity(Severity::Error)
    }

    pub fn warnings(&self) -> Vec<&ValidationIssue> {
        self.with_severity(Severity::Warning)
    }

    pub fn infos(&self) -> Vec<&ValidationIssue> {
        self.with_severity(Severity::Info)
    }

    pub fn has_code(&self, code: &str) -> bool {
        self.issues.iter().any(|i| i.code == code)
    }

    pub fn issues_with_code(&self, code: &str) -> Vec<&ValidationIssue> {
        self.issues.iter().filter(|i| i.code == code).collect()
    }

    pub fn issues_at(&self, level: Level) -> Vec<&ValidationIssue> {
        self.issues.iter().filter(|i| i.level == level).collect()
    }

    /// Strict policy: a result that is valid but carries warnings becomes invalid.
    /// The issue list is left untouched.
    pub fn apply_strict(mut self) -> Self {
        if self.valid && self.issues.iter().any(|i| i.severity == Severity::Warning) {
            self.valid = false;
        }
        self
    }

    pub fn summary(&self) -> String {
        format!(
            "{}: {} error(s), {} warning(s), {} info",
            if self.valid { "VALID" } else { "INVALID" },
            self.errors().len(),
            self.warnings().len(),
            self.infos().len()
        )
    }
}
