use log::debug;

use super::{
    initial_result, relax, shortest_path_result::ShortestPathResult, LineChangePenalty,
    ShortestPathSolver, LINE_CHANGE_PENALTY,
};
use crate::graphs::Graph;

/// Relaxes every arc of every reached node until a full pass changes
/// nothing.
///
/// Without negative cycles this takes at most `|V| - 1` improving passes.
/// The passes are not counted, so a negative cycle never terminates.
#[derive(Clone, Debug, Default)]
pub struct BellmanFord {
    penalty: LineChangePenalty,
}

impl BellmanFord {
    pub fn new() -> Self {
        BellmanFord {
            penalty: LineChangePenalty::Ignore,
        }
    }

    pub fn with_line_penalty() -> Self {
        BellmanFord::with_penalty(LineChangePenalty::Fixed(LINE_CHANGE_PENALTY))
    }

    pub fn with_penalty(penalty: LineChangePenalty) -> Self {
        BellmanFord { penalty }
    }
}

impl ShortestPathSolver for BellmanFord {
    fn solve(&self, graph: &dyn Graph, source: &str) -> ShortestPathResult {
        let nodes = graph.nodes();
        let mut result = initial_result(graph, source);

        let mut passes = 0;
        let mut changed = true;
        while changed {
            changed = false;
            passes += 1;

            for tail in nodes.iter() {
                let Some(distance_tail) = result.get_distance(tail) else {
                    continue;
                };

                for arc in graph.outgoing(tail) {
                    changed |= relax(&mut result, self.penalty, tail, distance_tail, arc);
                }
            }
        }

        debug!(
            "bellman-ford from {} converged after {} passes",
            source, passes
        );
        result
    }

    fn line_change_penalty(&self) -> LineChangePenalty {
        self.penalty
    }

    fn name(&self) -> &'static str {
        match self.penalty {
            LineChangePenalty::Ignore => "Bellman-Ford",
            LineChangePenalty::Fixed(_) => "Bellman-Ford (line penalty)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BellmanFord;
    use crate::{
        graphs::{adjacency_graph::AdjacencyGraph, small_test_graph},
        search::ShortestPathSolver,
    };

    #[test]
    fn distances_from_a() {
        let graph = small_test_graph();
        let result = BellmanFord::new().solve(&graph, "A");

        assert_eq!(result.get_distance("A"), Some(0.0));
        assert_eq!(result.get_distance("B"), Some(12.0));
        assert_eq!(result.get_distance("C"), Some(76.0));
        assert_eq!(result.get_distance("D"), Some(66.0));
        assert_eq!(result.get_distance("E"), Some(23.0));
    }

    #[test]
    fn predecessors_from_a() {
        let graph = small_test_graph();
        let result = BellmanFord::new().solve(&graph, "A");

        assert_eq!(result.get_predecessor("A"), None);
        assert_eq!(result.get_predecessor("B"), Some("A"));
        assert_eq!(result.get_predecessor("C"), Some("D"));
        assert_eq!(result.get_predecessor("D"), Some("E"));
        assert_eq!(result.get_predecessor("E"), Some("B"));
        assert_eq!(result.path("C"), vec!["A", "B", "E", "D", "C"]);
    }

    #[test]
    fn later_passes_fix_earlier_visits() {
        // C is visited before B, so its improvement needs a second pass
        let mut graph = AdjacencyGraph::new();
        graph.add_node("C");
        graph.add_arc("A", "B", 1.0);
        graph.add_arc("C", "D", 1.0);
        graph.add_arc("B", "C", 1.0);
        graph.add_arc("A", "D", 10.0);

        let result = BellmanFord::new().solve(&graph, "A");
        assert_eq!(result.get_distance("D"), Some(3.0));
        assert_eq!(result.get_predecessor("D"), Some("C"));
    }

    #[test]
    fn line_penalty_prefers_staying_on_line() {
        let mut graph = AdjacencyGraph::new();
        graph.add_arc_with_line("A", "B", 2.0, "1");
        graph.add_arc_with_line("B", "C", 2.0, "2");
        graph.add_arc_with_line("B", "C", 8.0, "1");

        let plain = BellmanFord::new().solve(&graph, "A");
        assert_eq!(plain.get_distance("C"), Some(4.0));
        assert_eq!(plain.get_arrival_line("C"), None);

        let penalized = BellmanFord::with_line_penalty().solve(&graph, "A");
        assert_eq!(penalized.get_distance("C"), Some(10.0));
        assert_eq!(penalized.get_arrival_line("C"), Some("1"));
        assert_eq!(penalized.get_arrival_line("A"), None);
    }
}
