use serde::{Deserialize, Serialize};

use super::arc::Arc;

/// Outgoing arcs of a single node. Parallel arcs are kept as they are.
#[derive(Clone, Default, Serialize, Deserialize, Debug)]
pub struct AdjacencyList {
    arcs: Vec<Arc>,
}

impl AdjacencyList {
    pub fn new() -> Self {
        AdjacencyList { arcs: Vec::new() }
    }

    pub fn push(&mut self, arc: Arc) {
        self.arcs.push(arc);
    }

    pub fn arcs(&self) -> &[Arc] {
        &self.arcs
    }

    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }
}
