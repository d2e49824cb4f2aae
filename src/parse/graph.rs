//! petgraph-based adjacency over sequence flows.

use petgraph::Direction;
use petgraph::graphmap::DiGraphMap;

use super::index::FlowEdge;

/// Outgoing/incoming adjacency keyed by element identifier. Neighbor sets are
/// distinct: parallel flows between the same pair count once.
pub struct FlowGraph<'a> {
    pub graph: DiGraphMap<&'a str, ()>,
}

impl<'a> FlowGraph<'a> {
    /// Build from every edge, including ones whose endpoints are not indexed.
    pub fn build(edges: &[FlowEdge<'a, '_>]) -> Self {
        let mut graph = DiGraphMap::new();
        for edge in edges {
            graph.add_edge(edge.source, edge.target, ());
        }
        FlowGraph { graph }
    }

    pub fn successors(&self, id: &'a str) -> Vec<&'a str> {
        self.neighbors(id, Direction::Outgoing)
    }

    pub fn predecessors(&self, id: &'a str) -> Vec<&'a str> {
        self.neighbors(id, Direction::Incoming)
    }

    fn neighbors(&self, id: &'a str, dir: Direction) -> Vec<&'a str> {
        if !self.graph.contains_node(id) {
            return vec![];
        }
        self.graph.neighbors_directed(id, dir).collect()
    }

    pub fn outgoing_count(&self, id: &'a str) -> usize {
        self.successors(id).len()
    }

    pub fn incoming_count(&self, id: &'a str) -> usize {
        self.predecessors(id).len()
    }

    /// True when the element appears on either end of any flow.
    pub fn is_connected(&self, id: &'a str) -> bool {
        self.graph.contains_node(id)
    }
}
