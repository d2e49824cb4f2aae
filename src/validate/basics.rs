//! Level 2: document basics (root element, namespace, process container).

use roxmltree::{Document, Node};

use crate::error::{Level, ValidationIssue, codes};
use crate::parse::{Lookup, local_name, qualified_name};
use crate::result::ValidationResult;

pub fn check(
    doc: &Document<'_>,
    lookup: &Lookup<'_>,
    mut result: ValidationResult,
) -> ValidationResult {
    let root = doc.root_element();

    if local_name(root) != "definitions" {
        result.add(
            ValidationIssue::error(
                Level::Basics,
                codes::INVALID_ROOT,
                format!(
                    "Root element must be 'definitions', found '{}'",
                    qualified_name(root)
                ),
            )
            .with_suggestion("Wrap the process in a <bpmn:definitions> element"),
        );
        return result;
    }

    if !declares_namespace(root, lookup.bpmn_ns) {
        result.add(
            ValidationIssue::warning(
                Level::Basics,
                codes::MISSING_BPMN_NAMESPACE,
                format!("BPMN namespace '{}' is not declared", lookup.bpmn_ns),
            )
            .with_suggestion(format!(
                "Add xmlns:bpmn=\"{}\" to the definitions element",
                lookup.bpmn_ns
            )),
        );
    }

    let Some(process) = find_process(doc, lookup) else {
        result.add(
            ValidationIssue::error(Level::Basics, codes::NO_PROCESS, "No process element found")
                .with_suggestion("Add a <bpmn:process> element inside definitions"),
        );
        return result;
    };

    // Same reading of the identifier as the element index.
    if process.attribute("id").is_none_or(str::is_empty) {
        result.add(
            ValidationIssue::error(
                Level::Basics,
                codes::PROCESS_NO_ID,
                "Process element has no id attribute",
            )
            .with_suggestion("Give the process a unique id, e.g. id=\"Process_1\""),
        );
    }

    result
}

/// The namespace may be bound to a prefix or be the default namespace of the
/// root tag itself.
fn declares_namespace(root: Node<'_, '_>, uri: &str) -> bool {
    root.namespaces().any(|ns| ns.uri() == uri) || root.tag_name().namespace() == Some(uri)
}

/// Any `process` in the document: BPMN-qualified first, then by bare name so
/// documents with an unexpected namespace still resolve.
fn find_process<'a, 'input>(
    doc: &'a Document<'input>,
    lookup: &Lookup<'_>,
) -> Option<Node<'a, 'input>> {
    doc.descendants()
        .find(|n| n.has_tag_name((lookup.bpmn_ns, "process")))
        .or_else(|| {
            doc.descendants()
                .find(|n| n.is_element() && local_name(*n) == "process")
        })
}
