//! Level 5: platform configuration rules per element kind.
//!
//! Rules are selected from `RULES` by element kind. Adding support for a new
//! kind means adding a row, not touching the dispatch loop.

use roxmltree::Node;

use crate::error::{Level, ValidationIssue, codes};
use crate::parse::{ElementIndex, ElementKind, Lookup, local_name};
use crate::result::ValidationResult;

/// What a rule needs to know about the element under inspection.
struct RuleContext<'a, 'input, 'l> {
    node: Node<'a, 'input>,
    id: &'a str,
    kind_name: &'a str,
    lookup: &'l Lookup<'l>,
}

impl RuleContext<'_, '_, '_> {
    fn error(&self, code: &str, message: String) -> ValidationIssue {
        ValidationIssue::error(Level::Rules, code, message).with_element(self.id, self.kind_name)
    }

    fn warning(&self, code: &str, message: String) -> ValidationIssue {
        ValidationIssue::warning(Level::Rules, code, message).with_element(self.id, self.kind_name)
    }
}

type Rule = fn(&RuleContext<'_, '_, '_>, &mut ValidationResult);

const RULES: &[(ElementKind, Rule)] = &[
    (ElementKind::ServiceTask, service_task),
    (ElementKind::UserTask, user_task),
    (ElementKind::ScriptTask, script_task),
    (ElementKind::SendTask, send_task),
    (ElementKind::CallActivity, call_activity),
    (ElementKind::IntermediateCatchEvent, timer),
    (ElementKind::BoundaryEvent, timer),
    (ElementKind::Timer, timer),
];

fn rules_for(kind: ElementKind) -> impl Iterator<Item = Rule> {
    RULES
        .iter()
        .filter(move |(k, _)| *k == kind)
        .map(|(_, rule)| *rule)
}

/// Apply every matching rule to every indexed element, in first-seen order.
/// Elements without an identifier and later copies of a duplicate are skipped.
pub fn check(
    index: &ElementIndex<'_, '_>,
    lookup: &Lookup<'_>,
    mut result: ValidationResult,
) -> ValidationResult {
    for (id, node) in index.elements() {
        let kind_name = local_name(node);
        let ctx = RuleContext {
            node,
            id,
            kind_name,
            lookup,
        };
        for rule in rules_for(ElementKind::from_local_name(kind_name)) {
            rule(&ctx, &mut result);
        }
    }
    result
}

// =============================================================================
// Rules
// =============================================================================

fn service_task(ctx: &RuleContext<'_, '_, '_>, result: &mut ValidationResult) {
    let Some(ext) = ctx.lookup.child(ctx.node, "extensionElements") else {
        result.add(
            ctx.error(
                codes::SERVICE_TASK_NO_CONFIG,
                format!("Service task '{}' has no extensionElements", ctx.id),
            )
            .with_suggestion("Add <bpmn:extensionElements> with an AIAgentConfiguration"),
        );
        return;
    };

    let Some(agent) = ctx.lookup.child(ext, "AIAgentConfiguration") else {
        result.add(
            ctx.error(
                codes::SERVICE_TASK_NO_AGENT,
                format!("Service task '{}' has no AIAgentConfiguration", ctx.id),
            )
            .with_suggestion("Add an AIAgentConfiguration element inside extensionElements"),
        );
        return;
    };

    let agent_id = ctx.lookup.attr(agent, "agentId");
    let agent_type = ctx.lookup.attr(agent, "agentType");

    if agent_id.is_none() && agent_type.is_none() {
        result.add(
            ctx.error(
                codes::AGENT_CONFIG_INCOMPLETE,
                format!("Agent config on '{}' needs agentId or agentType", ctx.id),
            )
            .with_suggestion("Reference a registered agent with agentId, or configure one inline with agentType"),
        );
        return;
    }

    if agent_id.is_none() && ctx.lookup.attr(agent, "prompt").is_none() {
        result.add(
            ctx.warning(
                codes::AGENT_NO_PROMPT,
                format!("Inline agent on '{}' has no prompt", ctx.id),
            )
            .with_suggestion("Set the prompt attribute on AIAgentConfiguration"),
        );
    }
}

fn user_task(ctx: &RuleContext<'_, '_, '_>, result: &mut ValidationResult) {
    let assignee = ctx.lookup.attr(ctx.node, "assignee").or_else(|| {
        ctx.lookup
            .descendant(ctx.node, "TaskDefinition")
            .and_then(|def| ctx.lookup.attr(def, "assignee"))
    });
    let candidate_groups = ctx.lookup.attr(ctx.node, "candidateGroups");

    if assignee.is_none() && candidate_groups.is_none() {
        result.add(
            ctx.warning(
                codes::USER_TASK_NO_ASSIGNEE,
                format!("User task '{}' has no assignee or candidate groups", ctx.id),
            )
            .with_suggestion("Set assignee or candidateGroups on the task"),
        );
    }
}

fn script_task(ctx: &RuleContext<'_, '_, '_>, result: &mut ValidationResult) {
    let Some(ext) = ctx.lookup.child(ctx.node, "extensionElements") else {
        result.add(
            ctx.error(
                codes::SCRIPT_TASK_NO_CONFIG,
                format!("Script task '{}' has no extensionElements", ctx.id),
            )
            .with_suggestion("Add <bpmn:extensionElements> with a ScriptTaskConfiguration"),
        );
        return;
    };

    let Some(config) = ctx.lookup.child(ext, "ScriptTaskConfiguration") else {
        result.add(
            ctx.error(
                codes::SCRIPT_TASK_NO_FUNCTION,
                format!("Script task '{}' has no ScriptTaskConfiguration", ctx.id),
            )
            .with_suggestion("Add a ScriptTaskConfiguration element inside extensionElements"),
        );
        return;
    };

    if ctx.lookup.attr(config, "functionId").is_none()
        && ctx.lookup.attr(config, "functionName").is_none()
    {
        result.add(
            ctx.error(
                codes::FUNCTION_CONFIG_INCOMPLETE,
                format!("Script config on '{}' needs functionId or functionName", ctx.id),
            )
            .with_suggestion("Set functionId or functionName on ScriptTaskConfiguration"),
        );
    }
}

fn send_task(ctx: &RuleContext<'_, '_, '_>, result: &mut ValidationResult) {
    let Some(ext) = ctx.lookup.child(ctx.node, "extensionElements") else {
        result.add(
            ctx.warning(
                codes::SEND_TASK_NO_CONFIG,
                format!("Send task '{}' has no extensionElements", ctx.id),
            )
            .with_suggestion("Add <bpmn:extensionElements> with a SendTaskConfiguration"),
        );
        return;
    };

    if ctx.lookup.child(ext, "SendTaskConfiguration").is_none() {
        result.add(
            ctx.warning(
                codes::SEND_TASK_NO_EMAIL,
                format!("Send task '{}' has no SendTaskConfiguration", ctx.id),
            )
            .with_suggestion("Add a SendTaskConfiguration describing the email to send"),
        );
    }
}

fn call_activity(ctx: &RuleContext<'_, '_, '_>, result: &mut ValidationResult) {
    let target = ctx.lookup.attr(ctx.node, "calledElement").or_else(|| {
        ctx.lookup
            .descendant(ctx.node, "CallActivityConfiguration")
            .and_then(|config| ctx.lookup.attr(config, "calledElement"))
    });

    if target.is_none() {
        result.add(
            ctx.error(
                codes::CALL_ACTIVITY_NO_TARGET,
                format!("Call activity '{}' does not name a called element", ctx.id),
            )
            .with_suggestion("Set calledElement to the id of the process to call"),
        );
    }
}

/// Only checked when a timer definition is present.
fn timer(ctx: &RuleContext<'_, '_, '_>, result: &mut ValidationResult) {
    let Some(def) = ctx.lookup.child(ctx.node, "timerEventDefinition") else {
        return;
    };

    let defined = ["timeDuration", "timeDate", "timeCycle"]
        .iter()
        .any(|field| ctx.lookup.attr_or_child_text(def, field).is_some());

    if !defined {
        result.add(
            ctx.error(
                codes::TIMER_NO_DEFINITION,
                format!("Timer on '{}' has no duration, date or cycle", ctx.id),
            )
            .with_suggestion("Add timeDuration, timeDate or timeCycle to timerEventDefinition"),
        );
    }
}
