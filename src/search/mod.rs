use self::shortest_path_result::{Path, ShortestPathResult};
use crate::graphs::{arc::Arc, Graph, Weight};

pub mod bellman_ford;
pub mod candidate_set;
pub mod dijkstra;
pub mod shortest_path_result;

/// Cost of changing lines used by the line aware solvers.
pub const LINE_CHANGE_PENALTY: Weight = 10.0;

/// How a solver prices a change from one line to another.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum LineChangePenalty {
    /// Lines are ignored and arrival lines are not recorded.
    #[default]
    Ignore,
    /// Taking an arc whose line differs from the line a node was reached by
    /// costs the given amount on top of the arc weight.
    Fixed(Weight),
}

impl LineChangePenalty {
    /// The penalty only applies if both lines are known and differ.
    pub fn cost(&self, arrival_line: Option<&str>, arc_line: Option<&str>) -> Weight {
        match (self, arrival_line, arc_line) {
            (LineChangePenalty::Fixed(penalty), Some(arrival_line), Some(arc_line))
                if arrival_line != arc_line =>
            {
                *penalty
            }
            _ => 0.0,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, LineChangePenalty::Fixed(_))
    }
}

/// Single source shortest path algorithms.
///
/// Every implementation returns a fresh result that holds an entry for each
/// node of the graph and for the source.
pub trait ShortestPathSolver: Send + Sync {
    fn solve(&self, graph: &dyn Graph, source: &str) -> ShortestPathResult;

    fn line_change_penalty(&self) -> LineChangePenalty;

    fn name(&self) -> &'static str;

    fn shortest_path(&self, graph: &dyn Graph, source: &str, target: &str) -> Option<Path> {
        self.solve(graph, source).get_path(target)
    }
}

/// Fresh result with every node unreached and `source` at distance zero.
pub(crate) fn initial_result(graph: &dyn Graph, source: &str) -> ShortestPathResult {
    let mut result = ShortestPathResult::new();
    for node in graph.nodes() {
        result.set_unreached(&node);
    }
    result.set_distance(source, 0.0);
    result
}

/// Tries to improve the head of `arc` via `tail`. Returns whether the head
/// was updated. Equal distances never replace an existing predecessor.
pub(crate) fn relax(
    result: &mut ShortestPathResult,
    penalty: LineChangePenalty,
    tail: &str,
    distance_tail: Weight,
    arc: &Arc,
) -> bool {
    let alternative_distance =
        distance_tail + arc.weight() + penalty.cost(result.get_arrival_line(tail), arc.line());

    let improves = match result.get_distance(arc.head()) {
        Some(current_distance) => alternative_distance < current_distance,
        None => true,
    };
    if !improves {
        return false;
    }

    result.set_distance(arc.head(), alternative_distance);
    result.set_predecessor(arc.head(), Some(tail));
    if penalty.is_active() {
        result.set_arrival_line(arc.head(), arc.line());
    }
    true
}

#[cfg(test)]
mod tests {
    use super::{initial_result, relax, LineChangePenalty, LINE_CHANGE_PENALTY};
    use crate::graphs::{arc::Arc, small_test_graph};

    #[test]
    fn penalty_needs_two_different_lines() {
        let penalty = LineChangePenalty::Fixed(LINE_CHANGE_PENALTY);
        assert_eq!(penalty.cost(Some("1"), Some("4")), 10.0);
        assert_eq!(penalty.cost(Some("1"), Some("1")), 0.0);
        assert_eq!(penalty.cost(None, Some("4")), 0.0);
        assert_eq!(penalty.cost(Some("1"), None), 0.0);
        assert_eq!(penalty.cost(None, None), 0.0);
    }

    #[test]
    fn ignore_never_costs() {
        assert_eq!(LineChangePenalty::Ignore.cost(Some("1"), Some("4")), 0.0);
        assert!(!LineChangePenalty::Ignore.is_active());
    }

    #[test]
    fn initial_result_has_only_source_reached() {
        let graph = small_test_graph();
        let result = initial_result(&graph, "A");

        assert_eq!(result.len(), 5);
        assert_eq!(result.get_distance("A"), Some(0.0));
        assert!(["B", "C", "D", "E"]
            .iter()
            .all(|node| !result.is_reached(node)));
    }

    #[test]
    fn relax_keeps_first_of_equal_candidates() {
        let graph = small_test_graph();
        let mut result = initial_result(&graph, "A");

        assert!(relax(&mut result, LineChangePenalty::Ignore, "A", 0.0, &Arc::new("B", 5.0)));
        assert!(!relax(&mut result, LineChangePenalty::Ignore, "C", 0.0, &Arc::new("B", 5.0)));
        assert_eq!(result.get_predecessor("B"), Some("A"));
        assert_eq!(result.get_arrival_line("B"), None);
    }

    #[test]
    fn relax_records_arrival_line_with_penalty() {
        let graph = small_test_graph();
        let mut result = initial_result(&graph, "A");
        let penalty = LineChangePenalty::Fixed(LINE_CHANGE_PENALTY);

        relax(&mut result, penalty, "A", 0.0, &Arc::with_line("B", 1.0, "1"));
        relax(&mut result, penalty, "B", 1.0, &Arc::with_line("E", 1.0, "2"));

        assert_eq!(result.get_arrival_line("B"), Some("1"));
        assert_eq!(result.get_distance("E"), Some(12.0));
        assert_eq!(result.get_arrival_line("E"), Some("2"));
    }
}
