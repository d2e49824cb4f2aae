//! Level 4: flow connectivity rules.

use crate::error::{Level, ValidationIssue, codes};
use crate::parse::{ElementIndex, ElementKind, FlowEdge, FlowGraph, Lookup, local_name};
use crate::result::ValidationResult;

/// Run all connectivity rules in order: edge references, orphans, gateways.
pub fn check<'a>(
    index: &ElementIndex<'a, '_>,
    graph: &FlowGraph<'a>,
    lookup: &Lookup<'_>,
    mut result: ValidationResult,
) -> ValidationResult {
    edges_reference_existing_elements(index, &mut result);
    no_orphan_elements(index, graph, &mut result);
    gateway_shapes(index, graph, lookup, &mut result);
    result
}

fn edges_reference_existing_elements(
    index: &ElementIndex<'_, '_>,
    result: &mut ValidationResult,
) {
    for edge in &index.flows {
        let flow_id = edge.id.unwrap_or("<unnamed>");
        if !index.contains(edge.source) {
            result.add(
                ValidationIssue::error(
                    Level::Connectivity,
                    codes::INVALID_SOURCE_REF,
                    format!(
                        "Sequence flow '{}' references unknown source '{}'",
                        flow_id, edge.source
                    ),
                )
                .with_element(flow_id, "sequenceFlow")
                .with_suggestion("Point sourceRef at the id of an existing element"),
            );
        }
        if !index.contains(edge.target) {
            result.add(
                ValidationIssue::error(
                    Level::Connectivity,
                    codes::INVALID_TARGET_REF,
                    format!(
                        "Sequence flow '{}' references unknown target '{}'",
                        flow_id, edge.target
                    ),
                )
                .with_element(flow_id, "sequenceFlow")
                .with_suggestion("Point targetRef at the id of an existing element"),
            );
        }
    }
}

fn no_orphan_elements<'a>(
    index: &ElementIndex<'a, '_>,
    graph: &FlowGraph<'a>,
    result: &mut ValidationResult,
) {
    for (id, node) in index.elements() {
        let name = local_name(node);
        if !ElementKind::from_local_name(name).is_flow_bearing() {
            continue;
        }
        if !graph.is_connected(id) {
            result.add(
                ValidationIssue::error(
                    Level::Connectivity,
                    codes::ORPHAN_ELEMENT,
                    format!("{} '{}' has no incoming or outgoing sequence flows", name, id),
                )
                .with_element(id, name)
                .with_suggestion("Connect the element to the process flow or remove it"),
            );
        }
    }
}

fn gateway_shapes<'a>(
    index: &ElementIndex<'a, '_>,
    graph: &FlowGraph<'a>,
    lookup: &Lookup<'_>,
    result: &mut ValidationResult,
) {
    for (id, node) in index.elements() {
        let name = local_name(node);
        let kind = ElementKind::from_local_name(name);
        if !kind.is_branching_gateway() {
            continue;
        }

        let incoming = graph.incoming_count(id);
        let outgoing = graph.outgoing_count(id);

        if incoming == 1 && outgoing < 2 {
            result.add(
                ValidationIssue::warning(
                    Level::Connectivity,
                    codes::GATEWAY_SINGLE_OUTPUT,
                    format!(
                        "Gateway '{}' has a single input and {} output(s); it does not branch",
                        id, outgoing
                    ),
                )
                .with_element(id, name)
                .with_suggestion("Add the missing branches or remove the gateway"),
            );
        }

        if kind == ElementKind::ExclusiveGateway && outgoing > 1 {
            let default_flow = lookup.attr(node, "default");
            let flows: Vec<_> = index.flows_from(id).collect();
            exclusive_gateway_conditions(id, default_flow, &flows, lookup, result);
        }
    }
}

/// Every outgoing flow of an exclusive gateway needs a condition or the
/// default marker. A single unconditioned flow with no declared default is
/// taken as the implicit else-branch.
fn exclusive_gateway_conditions(
    gateway_id: &str,
    default_flow: Option<&str>,
    flows: &[&FlowEdge<'_, '_>],
    lookup: &Lookup<'_>,
    result: &mut ValidationResult,
) {
    let is_default = |flow: &FlowEdge<'_, '_>| {
        (flow.id.is_some() && flow.id == default_flow) || marked_default(flow, lookup)
    };
    let has_condition =
        |flow: &FlowEdge<'_, '_>| lookup.child(flow.node, "conditionExpression").is_some();

    let any_default = flows.iter().copied().any(|f| is_default(f));
    let missing: Vec<&FlowEdge<'_, '_>> = flows
        .iter()
        .copied()
        .filter(|f| !has_condition(*f) && !is_default(*f))
        .collect();

    if missing.is_empty() || (missing.len() == 1 && !any_default) {
        return;
    }

    for flow in missing {
        let flow_id = flow.id.unwrap_or("<unnamed>");
        result.add(
            ValidationIssue::warning(
                Level::Connectivity,
                codes::MISSING_CONDITION,
                format!(
                    "Flow '{}' leaving exclusive gateway '{}' has no condition and is not the default",
                    flow_id, gateway_id
                ),
            )
            .with_element(flow_id, "sequenceFlow")
            .with_suggestion(format!(
                "Add a conditionExpression to '{}' or mark it isDefault=\"true\"",
                flow_id
            )),
        );
    }
}

/// `isDefault="true"` on the flow, bare or BPMN-qualified.
fn marked_default(flow: &FlowEdge<'_, '_>, lookup: &Lookup<'_>) -> bool {
    flow.node
        .attribute("isDefault")
        .or_else(|| flow.node.attribute((lookup.bpmn_ns, "isDefault")))
        == Some("true")
}
