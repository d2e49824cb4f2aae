//! Element kinds recognised by the validator.
//!
//! Classification is by local tag name only, so documents that bind the BPMN
//! namespace to an unusual prefix (or to the default namespace) classify the same.

use serde::{Deserialize, Serialize};

// =============================================================================
// ELEMENT KIND: tagged union over the tag names the levels care about
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementKind {
    // Containers
    Definitions,
    Process,

    // Events
    StartEvent,
    EndEvent,
    IntermediateCatchEvent,
    IntermediateThrowEvent,
    BoundaryEvent,

    // Activities
    Task,
    ServiceTask,
    UserTask,
    ScriptTask,
    SendTask,
    ReceiveTask,
    ManualTask,
    BusinessRuleTask,
    CallActivity,
    SubProcess,
    Transaction,

    // Gateways
    ExclusiveGateway,
    ParallelGateway,
    InclusiveGateway,
    EventBasedGateway,
    ComplexGateway,

    // Connections and artifacts
    SequenceFlow,
    DataObject,
    DataObjectReference,

    /// Any other element whose local name mentions a timer.
    Timer,
    Other,
}

impl ElementKind {
    pub fn from_local_name(name: &str) -> Self {
        match name {
            "definitions" => ElementKind::Definitions,
            "process" => ElementKind::Process,
            "startEvent" => ElementKind::StartEvent,
            "endEvent" => ElementKind::EndEvent,
            "intermediateCatchEvent" => ElementKind::IntermediateCatchEvent,
            "intermediateThrowEvent" => ElementKind::IntermediateThrowEvent,
            "boundaryEvent" => ElementKind::BoundaryEvent,
            "task" => ElementKind::Task,
            "serviceTask" => ElementKind::ServiceTask,
            "userTask" => ElementKind::UserTask,
            "scriptTask" => ElementKind::ScriptTask,
            "sendTask" => ElementKind::SendTask,
            "receiveTask" => ElementKind::ReceiveTask,
            "manualTask" => ElementKind::ManualTask,
            "businessRuleTask" => ElementKind::BusinessRuleTask,
            "callActivity" => ElementKind::CallActivity,
            "subProcess" => ElementKind::SubProcess,
            "transaction" => ElementKind::Transaction,
            "exclusiveGateway" => ElementKind::ExclusiveGateway,
            "parallelGateway" => ElementKind::ParallelGateway,
            "inclusiveGateway" => ElementKind::InclusiveGateway,
            "eventBasedGateway" => ElementKind::EventBasedGateway,
            "complexGateway" => ElementKind::ComplexGateway,
            "sequenceFlow" => ElementKind::SequenceFlow,
            "dataObject" => ElementKind::DataObject,
            "dataObjectReference" => ElementKind::DataObjectReference,
            other if other.to_ascii_lowercase().contains("timer") => ElementKind::Timer,
            _ => ElementKind::Other,
        }
    }

    /// Kinds expected to sit inside the sequence-flow graph. Start/end events
    /// and data artifacts are not included.
    pub fn is_flow_bearing(self) -> bool {
        matches!(
            self,
            ElementKind::Task
                | ElementKind::ServiceTask
                | ElementKind::UserTask
                | ElementKind::ScriptTask
                | ElementKind::SendTask
                | ElementKind::ReceiveTask
                | ElementKind::ManualTask
                | ElementKind::BusinessRuleTask
                | ElementKind::CallActivity
                | ElementKind::SubProcess
                | ElementKind::IntermediateCatchEvent
                | ElementKind::IntermediateThrowEvent
        ) || self.is_gateway()
    }

    pub fn is_gateway(self) -> bool {
        matches!(
            self,
            ElementKind::ExclusiveGateway
                | ElementKind::ParallelGateway
                | ElementKind::InclusiveGateway
                | ElementKind::EventBasedGateway
                | ElementKind::ComplexGateway
        )
    }

    /// Gateways whose fan-out shape is checked.
    pub fn is_branching_gateway(self) -> bool {
        matches!(
            self,
            ElementKind::ExclusiveGateway
                | ElementKind::ParallelGateway
                | ElementKind::InclusiveGateway
        )
    }
}
