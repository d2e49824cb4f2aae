//! Identifier index and flow-edge list, built in one pre-order traversal.

use std::collections::{BTreeMap, HashMap};

use roxmltree::{Document, Node};

use super::lookup::{Lookup, local_name};
use super::types::ElementKind;

/// A sequence flow as written, whether or not its endpoints resolve.
#[derive(Debug, Clone, Copy)]
pub struct FlowEdge<'a, 'input> {
    pub id: Option<&'a str>,
    pub source: &'a str,
    pub target: &'a str,
    pub node: Node<'a, 'input>,
}

/// Element with an identifier attribute that was already taken.
#[derive(Debug, Clone, Copy)]
pub struct DuplicateId<'a, 'input> {
    pub id: &'a str,
    pub node: Node<'a, 'input>,
}

pub struct ElementIndex<'a, 'input> {
    /// First occurrence of every identifier.
    pub by_id: HashMap<&'a str, Node<'a, 'input>>,
    /// Identifiers in first-seen order.
    pub ids: Vec<&'a str>,
    /// Later occurrences of an already-indexed identifier, in traversal order.
    pub duplicates: Vec<DuplicateId<'a, 'input>>,
    pub flows: Vec<FlowEdge<'a, 'input>>,
    /// Indexed elements per local name.
    pub counts: BTreeMap<String, usize>,
}

impl<'a, 'input> ElementIndex<'a, 'input> {
    pub fn build(doc: &'a Document<'input>, lookup: &Lookup<'_>) -> Self {
        let mut by_id = HashMap::new();
        let mut ids = Vec::new();
        let mut duplicates = Vec::new();
        let mut flows = Vec::new();
        let mut counts = BTreeMap::new();

        for node in doc.root_element().descendants().filter(|n| n.is_element()) {
            let name = local_name(node);

            if let Some(id) = node.attribute("id").filter(|id| !id.is_empty()) {
                if by_id.contains_key(id) {
                    duplicates.push(DuplicateId { id, node });
                } else {
                    by_id.insert(id, node);
                    ids.push(id);
                    *counts.entry(name.to_string()).or_insert(0) += 1;
                }
            }

            if name == "sequenceFlow" {
                if let (Some(source), Some(target)) =
                    (lookup.attr(node, "sourceRef"), lookup.attr(node, "targetRef"))
                {
                    flows.push(FlowEdge {
                        id: node.attribute("id"),
                        source,
                        target,
                        node,
                    });
                }
            }
        }

        ElementIndex {
            by_id,
            ids,
            duplicates,
            flows,
            counts,
        }
    }

    pub fn get(&self, id: &str) -> Option<Node<'a, 'input>> {
        self.by_id.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn kind_of(&self, id: &str) -> Option<ElementKind> {
        self.get(id)
            .map(|n| ElementKind::from_local_name(local_name(n)))
    }

    /// Indexed elements in first-seen order.
    pub fn elements(&self) -> impl Iterator<Item = (&'a str, Node<'a, 'input>)> + '_ {
        self.ids.iter().map(|id| (*id, self.by_id[id]))
    }

    pub fn count(&self, local_name: &str) -> usize {
        self.counts.get(local_name).copied().unwrap_or(0)
    }

    /// Sequence flows leaving `source`, in document order.
    pub fn flows_from<'s>(
        &'s self,
        source: &'s str,
    ) -> impl Iterator<Item = &'s FlowEdge<'a, 'input>> + 's {
        self.flows.iter().filter(move |f| f.source == source)
    }
}
