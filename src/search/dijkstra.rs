use log::debug;

use super::{
    candidate_set::CandidateSet, initial_result, relax, shortest_path_result::ShortestPathResult,
    LineChangePenalty, ShortestPathSolver, LINE_CHANGE_PENALTY,
};
use crate::graphs::Graph;

/// Greedy label setting search. Requires non-negative weights and penalties,
/// as a node removed from the candidate set is never improved again.
#[derive(Clone, Debug, Default)]
pub struct Dijkstra {
    penalty: LineChangePenalty,
}

impl Dijkstra {
    pub fn new() -> Self {
        Dijkstra {
            penalty: LineChangePenalty::Ignore,
        }
    }

    pub fn with_line_penalty() -> Self {
        Dijkstra::with_penalty(LineChangePenalty::Fixed(LINE_CHANGE_PENALTY))
    }

    pub fn with_penalty(penalty: LineChangePenalty) -> Self {
        Dijkstra { penalty }
    }
}

impl ShortestPathSolver for Dijkstra {
    fn solve(&self, graph: &dyn Graph, source: &str) -> ShortestPathResult {
        let mut result = initial_result(graph, source);
        let mut candidates = CandidateSet::new(graph.nodes());

        let mut expanded = 0;
        while let Some(tail) = candidates.pop_min(&result) {
            // all remaining candidates are unreachable as well
            let Some(distance_tail) = result.get_distance(&tail) else {
                break;
            };
            expanded += 1;

            for arc in graph.outgoing(&tail) {
                if candidates.contains(arc.head()) {
                    relax(&mut result, self.penalty, &tail, distance_tail, arc);
                }
            }
        }

        debug!("dijkstra from {} expanded {} nodes", source, expanded);
        result
    }

    fn line_change_penalty(&self) -> LineChangePenalty {
        self.penalty
    }

    fn name(&self) -> &'static str {
        match self.penalty {
            LineChangePenalty::Ignore => "Dijkstra",
            LineChangePenalty::Fixed(_) => "Dijkstra (line penalty)",
        }
    }
}
