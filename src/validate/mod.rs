//! The five-level validation pipeline.
//!
//! Level 1 (load) is the only fatal level: if the document cannot be read or
//! parsed the result holds that single issue. Levels 2–5 always run and only
//! ever add issues to the result threaded through them.
//!
//! `ValidatorOptions::strict` is not applied here. Callers opt in with
//! `ValidationResult::apply_strict`, as the wasm entry points do.

pub mod basics;
pub mod indexing;
pub mod node_rules;
pub mod structural;

use std::path::Path;

use roxmltree::Document;
use tracing::{debug, info, warn};

use crate::error::LoadError;
use crate::options::ValidatorOptions;
use crate::parse::{self, ElementIndex, FlowGraph, Lookup};
use crate::result::ValidationResult;

/// Validate a BPMN file on disk.
pub fn validate_file(path: impl AsRef<Path>, options: &ValidatorOptions) -> ValidationResult {
    let path = path.as_ref();
    match parse::load(path) {
        Ok(xml) => validate_str(&xml, options),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "failed to load BPMN document");
            finish(load_failure(err))
        }
    }
}

/// Validate BPMN XML held in memory.
pub fn validate_str(xml: &str, options: &ValidatorOptions) -> ValidationResult {
    match parse::parse_document(xml) {
        Ok(doc) => validate_document(&doc, options),
        Err(err) => {
            warn!(error = %err, "failed to parse BPMN document");
            finish(load_failure(err))
        }
    }
}

/// Run levels 2–5 over an already parsed document.
pub fn validate_document(doc: &Document<'_>, options: &ValidatorOptions) -> ValidationResult {
    let lookup = Lookup::new(options);
    let mut result = ValidationResult::new();

    result = run_level(2, result, |r| basics::check(doc, &lookup, r));

    let index = ElementIndex::build(doc, &lookup);
    result = run_level(3, result, |r| indexing::check(&index, r));

    let graph = FlowGraph::build(&index.flows);
    result = run_level(4, result, |r| structural::check(&index, &graph, &lookup, r));

    result = run_level(5, result, |r| node_rules::check(&index, &lookup, r));

    finish(result)
}

fn run_level(
    level: u8,
    result: ValidationResult,
    check: impl FnOnce(ValidationResult) -> ValidationResult,
) -> ValidationResult {
    let before = result.issues.len();
    let result = check(result);
    debug!(
        level,
        issues = result.issues.len() - before,
        valid = result.valid,
        "validation level complete"
    );
    result
}

fn load_failure(err: LoadError) -> ValidationResult {
    let mut result = ValidationResult::new();
    result.add(err.into_issue());
    result
}

fn finish(result: ValidationResult) -> ValidationResult {
    info!(valid = result.valid, issues = result.issues.len(), "validation finished");
    result
}
