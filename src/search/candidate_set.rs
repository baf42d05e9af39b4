use ahash::{HashSet, HashSetExt};

use super::shortest_path_result::ShortestPathResult;
use crate::graphs::Node;

/// Nodes whose distance is not final yet.
///
/// The minimum is found by a linear scan in insertion order, so among equal
/// distances the node registered first is chosen.
pub struct CandidateSet {
    order: Vec<Node>,
    members: HashSet<Node>,
}

impl CandidateSet {
    pub fn new(nodes: Vec<Node>) -> Self {
        let mut members = HashSet::with_capacity(nodes.len());
        let mut order = Vec::with_capacity(nodes.len());
        for node in nodes {
            if members.insert(node.clone()) {
                order.push(node);
            }
        }
        CandidateSet { order, members }
    }

    pub fn contains(&self, node: &str) -> bool {
        self.members.contains(node)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Removes and returns the candidate with the smallest distance in
    /// `result`. Unreached candidates only win if no candidate is reached.
    pub fn pop_min(&mut self, result: &ShortestPathResult) -> Option<Node> {
        let mut min_index = None;
        let mut min_distance = None;

        for (index, node) in self.order.iter().enumerate() {
            let distance = result.get_distance(node);
            let is_smaller = match (distance, min_distance) {
                (Some(distance), Some(min_distance)) => distance < min_distance,
                (Some(_), None) => true,
                (None, _) => min_index.is_none(),
            };
            if is_smaller {
                min_index = Some(index);
                min_distance = distance;
            }
        }

        let node = self.order.remove(min_index?);
        self.members.remove(&node);
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::CandidateSet;
    use crate::search::shortest_path_result::ShortestPathResult;

    fn candidates(nodes: &[&str]) -> CandidateSet {
        CandidateSet::new(nodes.iter().map(|node| node.to_string()).collect())
    }

    #[test]
    fn pops_smallest_distance_first() {
        let mut result = ShortestPathResult::new();
        result.set_distance("A", 7.0);
        result.set_distance("B", 3.0);
        result.set_distance("C", 5.0);

        let mut set = candidates(&["A", "B", "C"]);
        assert_eq!(set.pop_min(&result).as_deref(), Some("B"));
        assert_eq!(set.pop_min(&result).as_deref(), Some("C"));
        assert_eq!(set.pop_min(&result).as_deref(), Some("A"));
        assert_eq!(set.pop_min(&result), None);
        assert!(set.is_empty());
    }

    #[test]
    fn ties_go_to_first_inserted() {
        let mut result = ShortestPathResult::new();
        result.set_distance("X", 4.0);
        result.set_distance("Y", 4.0);

        let mut set = candidates(&["Y", "X"]);
        assert_eq!(set.pop_min(&result).as_deref(), Some("Y"));
    }

    #[test]
    fn unreached_candidates_come_last() {
        let mut result = ShortestPathResult::new();
        result.set_distance("C", 100.0);

        let mut set = candidates(&["A", "B", "C"]);
        assert_eq!(set.pop_min(&result).as_deref(), Some("C"));
        assert_eq!(set.pop_min(&result).as_deref(), Some("A"));
        assert!(set.contains("B"));
        assert!(!set.contains("A"));
        assert_eq!(set.len(), 1);
    }
}
