use self::{adjacency_graph::AdjacencyGraph, arc::Arc};

pub mod adjacency_graph;
pub mod adjacency_list;
pub mod arc;
pub mod graph_factory;

/// Nodes carry no data besides their name, so the name is the node.
pub type Node = String;
pub type Weight = f64;
/// Category attached to an arc, e.g. the transit line serving it.
pub type Line = String;

/// A directed graph with non-negative arc weights.
///
/// Asking for the outgoing arcs of a node that was never registered is not
/// an error, such a node simply has no outgoing arcs.
pub trait Graph: Send + Sync {
    /// All registered nodes in first-insertion order.
    fn nodes(&self) -> Vec<Node>;

    /// Arcs leaving `node` in insertion order.
    fn outgoing(&self, node: &str) -> &[Arc];

    fn contains(&self, node: &str) -> bool;

    fn number_of_nodes(&self) -> usize {
        self.nodes().len()
    }

    fn number_of_arcs(&self) -> usize {
        self.nodes()
            .iter()
            .map(|node| self.outgoing(node).len())
            .sum()
    }
}

/// The five node graph used throughout the tests.
///
/// Shortest distances from `A` are `A=0, B=12, E=23, D=66, C=76`.
pub fn small_test_graph() -> AdjacencyGraph {
    let mut graph = AdjacencyGraph::new();
    graph.add_arc("A", "B", 12.0);
    graph.add_arc("A", "D", 87.0);
    graph.add_arc("B", "E", 11.0);
    graph.add_arc("C", "A", 19.0);
    graph.add_arc("D", "B", 23.0);
    graph.add_arc("D", "C", 10.0);
    graph.add_arc("E", "D", 43.0);
    graph
}
