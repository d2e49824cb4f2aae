use bpmn_validator::{ValidationIssue, ValidationResult, ValidatorOptions, validate_str};

pub const BPMN_NS: &str = "http://www.omg.org/spec/BPMN/20100524/MODEL";
pub const PLATFORM_NS: &str = "http://periscope.dev/schema/bpmn";

// =============================================================================
// Document builders
// =============================================================================

/// Wrap process content in a `definitions` root declaring both namespaces.
pub fn process_xml(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<bpmn:definitions xmlns:bpmn="{BPMN_NS}" xmlns:periscope="{PLATFORM_NS}">
  <bpmn:process id="test_process">
    {body}
  </bpmn:process>
</bpmn:definitions>"#
    )
}

/// Process content with start and end events already connected around `body`,
/// which must expose an element with id `entry` and one with id `exit`.
pub fn wired_process_xml(body: &str) -> String {
    process_xml(&format!(
        r#"<bpmn:startEvent id="start"/>
    {body}
    <bpmn:endEvent id="end"/>
    <bpmn:sequenceFlow id="flow_in" sourceRef="start" targetRef="entry"/>
    <bpmn:sequenceFlow id="flow_out" sourceRef="exit" targetRef="end"/>"#
    ))
}

pub fn validate(xml: &str) -> ValidationResult {
    validate_str(xml, &ValidatorOptions::default())
}

// =============================================================================
// Assertions
// =============================================================================

pub fn assert_has_code(result: &ValidationResult, code: &str) {
    assert!(
        result.has_code(code),
        "Expected issue {}, got: {:#?}",
        code,
        result.issues
    );
}

pub fn assert_no_code(result: &ValidationResult, code: &str) {
    assert!(
        !result.has_code(code),
        "Did not expect issue {}, but got: {:#?}",
        code,
        result.issues
    );
}

pub fn codes(result: &ValidationResult) -> Vec<&str> {
    result.issues.iter().map(|i| i.code.as_str()).collect()
}

pub fn element_ids<'r>(issues: &[&'r ValidationIssue]) -> Vec<&'r str> {
    issues
        .iter()
        .filter_map(|i| i.element_id.as_deref())
        .collect()
}

pub fn render(result: &ValidationResult) -> String {
    result
        .issues
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
