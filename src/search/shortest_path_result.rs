use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

use crate::graphs::{Line, Node, Weight};

/// A shortest path from the source to some target.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub nodes: Vec<Node>,
    pub distance: Weight,
}

/// What a single solve knows about one node.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeEntry {
    /// `None` while the node is unreached.
    pub distance: Option<Weight>,
    pub predecessor: Option<Node>,
    /// Line of the arc that last improved `distance`. Only recorded when a
    /// line change penalty is active.
    pub arrival_line: Option<Line>,
}

/// Distances, predecessors and arrival lines produced by one solve.
///
/// Entries are kept sorted by node name so that results of different
/// solvers print and compare the same way.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ShortestPathResult {
    entries: BTreeMap<Node, NodeEntry>,
}

impl ShortestPathResult {
    pub fn new() -> Self {
        ShortestPathResult {
            entries: BTreeMap::new(),
        }
    }

    /// Resets `node` to unreached, without predecessor or arrival line.
    pub fn set_unreached(&mut self, node: &str) {
        self.entries.insert(node.to_string(), NodeEntry::default());
    }

    fn entry_mut(&mut self, node: &str) -> &mut NodeEntry {
        self.entries.entry(node.to_string()).or_default()
    }

    pub fn set_distance(&mut self, node: &str, distance: Weight) {
        self.entry_mut(node).distance = Some(distance);
    }

    /// Distance of `node`, `None` if it was never reached.
    pub fn get_distance(&self, node: &str) -> Option<Weight> {
        self.entries.get(node)?.distance
    }

    pub fn is_reached(&self, node: &str) -> bool {
        self.get_distance(node).is_some()
    }

    pub fn set_predecessor(&mut self, node: &str, predecessor: Option<&str>) {
        self.entry_mut(node).predecessor = predecessor.map(str::to_string);
    }

    pub fn get_predecessor(&self, node: &str) -> Option<&str> {
        self.entries.get(node)?.predecessor.as_deref()
    }

    pub fn set_arrival_line(&mut self, node: &str, line: Option<&str>) {
        self.entry_mut(node).arrival_line = line.map(str::to_string);
    }

    pub fn get_arrival_line(&self, node: &str) -> Option<&str> {
        self.entries.get(node)?.arrival_line.as_deref()
    }

    /// Follows predecessors back from `destination` and returns the nodes in
    /// travel order.
    ///
    /// The walk starts at `destination` whether or not it was reached, so an
    /// unreached destination yields `[destination]`. Use `get_distance` or
    /// `get_path` to tell both cases apart.
    pub fn path(&self, destination: &str) -> Vec<Node> {
        let mut nodes = vec![destination.to_string()];

        // A predecessor chain never holds more nodes than there are entries.
        let mut current = destination;
        while let Some(predecessor) = self.get_predecessor(current) {
            if nodes.len() > self.entries.len() {
                break;
            }
            nodes.push(predecessor.to_string());
            current = predecessor;
        }

        nodes.reverse();
        nodes
    }

    /// Path to `target` together with its distance, `None` if unreached.
    pub fn get_path(&self, target: &str) -> Option<Path> {
        let distance = self.get_distance(target)?;
        Some(Path {
            nodes: self.path(target),
            distance,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Node, &NodeEntry)> + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for ShortestPathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (node, entry) in self.entries.iter() {
            match entry.distance {
                Some(distance) => write!(f, "{} -> V:{}", node, distance)?,
                None => write!(f, "{} -> V:inf", node)?,
            }
            writeln!(
                f,
                " p:{} l:{}",
                entry.predecessor.as_deref().unwrap_or("-"),
                entry.arrival_line.as_deref().unwrap_or("-")
            )?;
        }
        Ok(())
    }
}
