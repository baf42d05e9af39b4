use std::{
    path::Path,
    time::{Duration, Instant},
};

use indicatif::{ProgressBar, ProgressIterator, ProgressStyle};
use itertools::Itertools;
use rand::{seq::SliceRandom, Rng};

use crate::{
    graphs::{
        adjacency_graph::AdjacencyGraph,
        graph_factory::{GraphFactory, GraphReadError},
        Graph, Node,
    },
    search::{shortest_path_result::ShortestPathResult, ShortestPathSolver},
};

/// Two distances closer than this are considered equal.
pub const DISTANCE_TOLERANCE: f64 = 1e-3;

pub fn get_progressbar(job_name: &str, len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_message(job_name.to_string());
    bar.set_style(
        ProgressStyle::with_template(" {msg} {wide_bar} {pos}/{len} eta: {eta_precise}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar
}

pub fn get_progressspinner(job_name: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(job_name.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

pub fn read_graph_with_spinner(path: &Path) -> Result<AdjacencyGraph, GraphReadError> {
    let spinner = get_progressspinner(&format!("Reading {}", path.display()));
    let graph = GraphFactory::from_file(path);
    spinner.finish_and_clear();
    graph
}

/// Random graph on `number_of_nodes` nodes named `n0, n1, ...`. Every node is
/// registered even if no arc touches it. Arcs get a weight in `1..100` and,
/// if `lines` is not empty, one of the given lines.
pub fn random_graph<R: Rng>(
    rng: &mut R,
    number_of_nodes: u32,
    number_of_arcs: u32,
    lines: &[&str],
) -> AdjacencyGraph {
    let mut graph = AdjacencyGraph::new();
    if number_of_nodes == 0 {
        return graph;
    }

    let names = (0..number_of_nodes)
        .map(|index| format!("n{}", index))
        .collect_vec();
    for name in names.iter() {
        graph.add_node(name);
    }

    for _ in 0..number_of_arcs {
        let tail = &names[rng.gen_range(0..names.len())];
        let head = &names[rng.gen_range(0..names.len())];
        let weight = rng.gen_range(1.0..100.0);
        match lines.choose(rng) {
            Some(line) => graph.add_arc_with_line(tail, head, weight, line),
            None => graph.add_arc(tail, head, weight),
        }
    }

    graph
}

pub fn random_sources<R: Rng>(rng: &mut R, graph: &dyn Graph, number_of_sources: u32) -> Vec<Node> {
    let nodes = graph.nodes();
    (0..number_of_sources)
        .filter_map(|_| nodes.choose(rng).cloned())
        .collect()
}

/// Average time `solver` needs for one solve from each of `sources`.
pub fn benchmark(
    solver: &dyn ShortestPathSolver,
    graph: &dyn Graph,
    sources: &[Node],
) -> Duration {
    if sources.is_empty() {
        return Duration::ZERO;
    }

    let bar = get_progressbar(solver.name(), sources.len() as u64);
    let total: Duration = sources
        .iter()
        .progress_with(bar)
        .map(|source| {
            let start = Instant::now();
            solver.solve(graph, source);
            start.elapsed()
        })
        .sum();

    total / sources.len() as u32
}

/// Nodes whose reachability or distance differs between the two results.
pub fn distance_mismatches(
    first: &ShortestPathResult,
    second: &ShortestPathResult,
    tolerance: f64,
) -> Vec<Node> {
    first
        .iter()
        .map(|(node, _)| node)
        .chain(second.iter().map(|(node, _)| node))
        .unique()
        .filter(|node| {
            match (first.get_distance(node), second.get_distance(node)) {
                (Some(a), Some(b)) => (a - b).abs() > tolerance,
                (None, None) => false,
                _ => true,
            }
        })
        .cloned()
        .sorted()
        .collect()
}

/// Nodes whose predecessor differs between the two results.
pub fn predecessor_mismatches(first: &ShortestPathResult, second: &ShortestPathResult) -> Vec<Node> {
    first
        .iter()
        .map(|(node, _)| node)
        .chain(second.iter().map(|(node, _)| node))
        .unique()
        .filter(|node| first.get_predecessor(node) != second.get_predecessor(node))
        .cloned()
        .sorted()
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::{distance_mismatches, predecessor_mismatches, random_graph, random_sources};
    use crate::{graphs::Graph, search::shortest_path_result::ShortestPathResult};

    #[test]
    fn random_graph_has_requested_size() {
        let mut rng = StdRng::seed_from_u64(7);
        let graph = random_graph(&mut rng, 20, 50, &["1", "2"]);

        assert_eq!(graph.number_of_nodes(), 20);
        assert_eq!(graph.number_of_arcs(), 50);
        assert!(graph
            .nodes()
            .iter()
            .flat_map(|node| graph.outgoing(node))
            .all(|arc| arc.line().is_some() && arc.weight() >= 1.0));

        assert_eq!(random_sources(&mut rng, &graph, 5).len(), 5);
    }

    #[test]
    fn mismatches_respect_tolerance() {
        let mut first = ShortestPathResult::new();
        first.set_distance("A", 1.0);
        first.set_distance("B", 2.0);
        first.set_unreached("C");
        first.set_predecessor("B", Some("A"));

        let mut second = ShortestPathResult::new();
        second.set_distance("A", 1.0005);
        second.set_distance("B", 2.5);
        second.set_distance("C", 4.0);
        second.set_predecessor("B", Some("C"));

        assert_eq!(distance_mismatches(&first, &second, 1e-3), vec!["B", "C"]);
        assert_eq!(predecessor_mismatches(&first, &second), vec!["B"]);
    }
}
