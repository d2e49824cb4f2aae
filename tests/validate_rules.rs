//! Integration tests for level 5: platform configuration per element kind.

#[allow(dead_code)]
mod helpers;

use bpmn_validator::{Level, Severity, ValidationResult, codes};
use helpers::*;

/// Validate a single element wired between start and end; it must have id `entry`
/// and be both the entry and exit point, so the flow graph is complete.
fn validate_element(element: &str) -> ValidationResult {
    validate(&wired_process_xml(&format!(
        "{element}\n    <bpmn:task id=\"exit\"/>\n    <bpmn:sequenceFlow id=\"f\" sourceRef=\"entry\" targetRef=\"exit\"/>"
    )))
}

fn level5(result: &ValidationResult) -> Vec<&str> {
    result
        .issues_at(Level::Rules)
        .into_iter()
        .map(|i| i.code.as_str())
        .collect()
}

#[test]
fn inline_agent_without_prompt_is_single_warning() {
    let result = validate_element(
        r#"<bpmn:serviceTask id="entry">
      <bpmn:extensionElements><periscope:AIAgentConfiguration periscope:agentType="llm"/></bpmn:extensionElements>
    </bpmn:serviceTask>"#,
    );
    assert_eq!(codes(&result), vec![codes::AGENT_NO_PROMPT]);
    assert_eq!(result.issues[0].severity, Severity::Warning);
    assert!(result.errors().is_empty());
    assert!(result.valid);
}

#[test]
fn service_task_without_extensions() {
    let result = validate_element(r#"<bpmn:serviceTask id="entry"/>"#);
    assert_eq!(level5(&result), vec![codes::SERVICE_TASK_NO_CONFIG]);
    assert!(!result.valid);
}

#[test]
fn service_task_without_agent() {
    let result = validate_element(
        r#"<bpmn:serviceTask id="entry"><bpmn:extensionElements/></bpmn:serviceTask>"#,
    );
    assert_eq!(level5(&result), vec![codes::SERVICE_TASK_NO_AGENT]);
}

#[test]
fn agent_config_needs_id_or_type() {
    let result = validate_element(
        r#"<bpmn:serviceTask id="entry">
      <bpmn:extensionElements><periscope:AIAgentConfiguration periscope:prompt="orphan prompt"/></bpmn:extensionElements>
    </bpmn:serviceTask>"#,
    );
    assert_eq!(level5(&result), vec![codes::AGENT_CONFIG_INCOMPLETE]);
}

#[test]
fn unprefixed_extension_attributes_are_accepted() {
    let result = validate_element(
        r#"<bpmn:serviceTask id="entry">
      <bpmn:extensionElements><AIAgentConfiguration agentType="llm" prompt="Summarise"/></bpmn:extensionElements>
    </bpmn:serviceTask>"#,
    );
    assert!(level5(&result).is_empty(), "{:#?}", result.issues);
}

#[test]
fn user_task_without_assignment_is_warning() {
    let result = validate_element(r#"<bpmn:userTask id="entry"/>"#);
    assert_eq!(level5(&result), vec![codes::USER_TASK_NO_ASSIGNEE]);
    assert!(result.valid);
}

#[test]
fn user_task_with_nested_task_definition() {
    let result = validate_element(
        r#"<bpmn:userTask id="entry">
      <bpmn:extensionElements><periscope:TaskDefinition periscope:assignee="ops-lead"/></bpmn:extensionElements>
    </bpmn:userTask>"#,
    );
    assert!(level5(&result).is_empty(), "{:#?}", result.issues);
}

#[test]
fn script_task_chain() {
    assert_eq!(
        level5(&validate_element(r#"<bpmn:scriptTask id="entry"/>"#)),
        vec![codes::SCRIPT_TASK_NO_CONFIG]
    );
    assert_eq!(
        level5(&validate_element(
            r#"<bpmn:scriptTask id="entry"><bpmn:extensionElements/></bpmn:scriptTask>"#
        )),
        vec![codes::SCRIPT_TASK_NO_FUNCTION]
    );
    assert_eq!(
        level5(&validate_element(
            r#"<bpmn:scriptTask id="entry"><bpmn:extensionElements><periscope:ScriptTaskConfiguration/></bpmn:extensionElements></bpmn:scriptTask>"#
        )),
        vec![codes::FUNCTION_CONFIG_INCOMPLETE]
    );
    assert!(
        level5(&validate_element(
            r#"<bpmn:scriptTask id="entry"><bpmn:extensionElements><periscope:ScriptTaskConfiguration periscope:functionId="fn-42"/></bpmn:extensionElements></bpmn:scriptTask>"#
        ))
        .is_empty()
    );
}

#[test]
fn send_task_gaps_are_warnings() {
    let no_config = validate_element(r#"<bpmn:sendTask id="entry"/>"#);
    assert_eq!(level5(&no_config), vec![codes::SEND_TASK_NO_CONFIG]);
    assert!(no_config.valid);

    let no_email = validate_element(
        r#"<bpmn:sendTask id="entry"><bpmn:extensionElements/></bpmn:sendTask>"#,
    );
    assert_eq!(level5(&no_email), vec![codes::SEND_TASK_NO_EMAIL]);
    assert!(no_email.valid);
}

#[test]
fn call_activity_without_target_is_single_error() {
    let result = validate_element(r#"<bpmn:callActivity id="entry"/>"#);
    assert_eq!(codes(&result), vec![codes::CALL_ACTIVITY_NO_TARGET]);
    assert_eq!(result.errors().len(), 1);
}

#[test]
fn call_activity_target_from_config() {
    let result = validate_element(
        r#"<bpmn:callActivity id="entry">
      <bpmn:extensionElements><periscope:CallActivityConfiguration periscope:calledElement="billing"/></bpmn:extensionElements>
    </bpmn:callActivity>"#,
    );
    assert!(result.issues.is_empty(), "{:#?}", result.issues);
}

#[test]
fn empty_timer_definition_is_error() {
    let result = validate_element(
        r#"<bpmn:intermediateCatchEvent id="entry"><bpmn:timerEventDefinition/></bpmn:intermediateCatchEvent>"#,
    );
    assert_eq!(codes(&result), vec![codes::TIMER_NO_DEFINITION]);
}

#[test]
fn boundary_timer_with_cycle_is_fine() {
    let result = validate_element(
        r#"<bpmn:task id="entry"/>
    <bpmn:boundaryEvent id="reminder" attachedToRef="entry">
      <bpmn:timerEventDefinition><bpmn:timeCycle>R3/PT10M</bpmn:timeCycle></bpmn:timerEventDefinition>
    </bpmn:boundaryEvent>"#,
    );
    assert!(result.issues.is_empty(), "{:#?}", result.issues);
}

#[test]
fn catch_event_without_timer_is_not_checked() {
    let result = validate_element(
        r#"<bpmn:intermediateCatchEvent id="entry"><bpmn:messageEventDefinition/></bpmn:intermediateCatchEvent>"#,
    );
    assert!(result.issues.is_empty(), "{:#?}", result.issues);
}

#[test]
fn rules_run_for_every_matching_element_in_document_order() {
    let result = validate(&process_xml(
        r#"<bpmn:startEvent id="s"/><bpmn:endEvent id="e"/>
    <bpmn:callActivity id="first"/>
    <bpmn:scriptTask id="second"/>
    <bpmn:callActivity id="third"/>
    <bpmn:sequenceFlow id="f1" sourceRef="s" targetRef="first"/>
    <bpmn:sequenceFlow id="f2" sourceRef="first" targetRef="second"/>
    <bpmn:sequenceFlow id="f3" sourceRef="second" targetRef="third"/>
    <bpmn:sequenceFlow id="f4" sourceRef="third" targetRef="e"/>"#,
    ));
    let found: Vec<_> = result
        .issues_at(Level::Rules)
        .into_iter()
        .map(|i| (i.code.as_str(), i.element_id.as_deref().unwrap()))
        .collect();
    assert_eq!(
        found,
        vec![
            (codes::CALL_ACTIVITY_NO_TARGET, "first"),
            (codes::SCRIPT_TASK_NO_CONFIG, "second"),
            (codes::CALL_ACTIVITY_NO_TARGET, "third"),
        ]
    );
}

#[test]
fn platform_extension_vocabulary_is_recognised() {
    let result = validate(&process_xml(
        r#"<bpmn:startEvent id="start"/>
    <bpmn:serviceTask id="enrich">
      <bpmn:extensionElements><periscope:AIAgentConfiguration agentId="a1"/></bpmn:extensionElements>
    </bpmn:serviceTask>
    <bpmn:scriptTask id="score">
      <bpmn:extensionElements><periscope:ScriptTaskConfiguration functionName="f"/></bpmn:extensionElements>
    </bpmn:scriptTask>
    <bpmn:sendTask id="notify">
      <bpmn:extensionElements><periscope:SendTaskConfiguration/></bpmn:extensionElements>
    </bpmn:sendTask>
    <bpmn:userTask id="approve">
      <bpmn:extensionElements><periscope:TaskDefinition assignee="finance"/></bpmn:extensionElements>
    </bpmn:userTask>
    <bpmn:callActivity id="archive">
      <bpmn:extensionElements><periscope:CallActivityConfiguration calledElement="archiving"/></bpmn:extensionElements>
    </bpmn:callActivity>
    <bpmn:endEvent id="end"/>
    <bpmn:sequenceFlow id="f1" sourceRef="start" targetRef="enrich"/>
    <bpmn:sequenceFlow id="f2" sourceRef="enrich" targetRef="score"/>
    <bpmn:sequenceFlow id="f3" sourceRef="score" targetRef="notify"/>
    <bpmn:sequenceFlow id="f4" sourceRef="notify" targetRef="approve"/>
    <bpmn:sequenceFlow id="f5" sourceRef="approve" targetRef="archive"/>
    <bpmn:sequenceFlow id="f6" sourceRef="archive" targetRef="end"/>"#,
    ));
    assert!(result.valid, "{:#?}", result.issues);
    assert!(result.issues.is_empty(), "{:#?}", result.issues);
}
