use std::fmt;

use ahash::{HashMap, HashMapExt};

use super::{adjacency_list::AdjacencyList, arc::Arc, Graph, Node, Weight};

/// Mutable graph backed by one adjacency list per node.
///
/// Nodes keep the order in which they were first seen, which is also the
/// order in which the solvers visit them.
#[derive(Clone, Default, Debug)]
pub struct AdjacencyGraph {
    nodes: Vec<Node>,
    adjacency: Vec<AdjacencyList>,
    indices: HashMap<Node, usize>,
}

impl AdjacencyGraph {
    pub fn new() -> Self {
        AdjacencyGraph {
            nodes: Vec::new(),
            adjacency: Vec::new(),
            indices: HashMap::new(),
        }
    }

    /// Registers `node` if it is unknown and returns its position.
    pub fn add_node(&mut self, node: &str) -> usize {
        if let Some(&index) = self.indices.get(node) {
            return index;
        }

        let index = self.nodes.len();
        self.nodes.push(node.to_string());
        self.adjacency.push(AdjacencyList::new());
        self.indices.insert(node.to_string(), index);
        index
    }

    /// Adds an untagged arc, registering both endpoints.
    pub fn add_arc(&mut self, tail: &str, head: &str, weight: Weight) {
        self.push_arc(tail, Arc::new(head, weight));
    }

    /// Adds an arc served by `line`, registering both endpoints.
    pub fn add_arc_with_line(&mut self, tail: &str, head: &str, weight: Weight, line: &str) {
        self.push_arc(tail, Arc::with_line(head, weight, line));
    }

    fn push_arc(&mut self, tail: &str, arc: Arc) {
        let tail_index = self.add_node(tail);
        self.add_node(arc.head());
        self.adjacency[tail_index].push(arc);
    }
}

impl Graph for AdjacencyGraph {
    fn nodes(&self) -> Vec<Node> {
        self.nodes.clone()
    }

    fn outgoing(&self, node: &str) -> &[Arc] {
        match self.indices.get(node) {
            Some(&index) => self.adjacency[index].arcs(),
            None => &[],
        }
    }

    fn contains(&self, node: &str) -> bool {
        self.indices.contains_key(node)
    }

    fn number_of_nodes(&self) -> usize {
        self.nodes.len()
    }

    fn number_of_arcs(&self) -> usize {
        self.adjacency.iter().map(AdjacencyList::len).sum()
    }
}

impl fmt::Display for AdjacencyGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (node, list) in self.nodes.iter().zip(self.adjacency.iter()) {
            write!(f, "{} ->", node)?;
            for arc in list.arcs() {
                match arc.line() {
                    Some(line) => write!(f, " {}({}, {})", arc.head(), arc.weight(), line)?,
                    None => write!(f, " {}({})", arc.head(), arc.weight())?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
