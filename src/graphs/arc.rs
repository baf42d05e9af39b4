use serde::{Deserialize, Serialize};

use super::{Line, Node, Weight};

/// A directed, weighted and optionally line tagged arc. The tail is implied
/// by the adjacency list the arc is stored in.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Arc {
    head: Node,
    weight: Weight,
    line: Option<Line>,
}

impl Arc {
    pub fn new(head: impl Into<Node>, weight: Weight) -> Arc {
        Arc {
            head: head.into(),
            weight,
            line: None,
        }
    }

    pub fn with_line(head: impl Into<Node>, weight: Weight, line: impl Into<Line>) -> Arc {
        Arc {
            head: head.into(),
            weight,
            line: Some(line.into()),
        }
    }

    /// Destination of the arc.
    pub fn head(&self) -> &str {
        &self.head
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn line(&self) -> Option<&str> {
        self.line.as_deref()
    }
}
