use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use log::error;
use serde::Serialize;
use transit_paths::{
    graphs::{Graph, Node},
    search::{
        bellman_ford::BellmanFord, dijkstra::Dijkstra, shortest_path_result::ShortestPathResult,
        ShortestPathSolver,
    },
    utility::{
        benchmark, distance_mismatches, predecessor_mismatches, read_graph_with_spinner,
        DISTANCE_TOLERANCE,
    },
};

/// Solves from one source with Bellman-Ford and Dijkstra, times both and
/// checks that they agree.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Network file, one `tail<TAB>head<TAB>weight[<TAB>line]` arc per row
    #[arg(short, long)]
    graph: PathBuf,
    /// Source node
    #[arg(short, long)]
    source: String,
    /// Charge a fixed penalty for changing lines
    #[arg(short, long)]
    line_penalty: bool,
    /// Number of timed solves per algorithm
    #[arg(short, long, default_value = "1")]
    runs: u32,
    /// Print both results as JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Comparison<'a> {
    source: &'a str,
    bellman_ford: &'a ShortestPathResult,
    dijkstra: &'a ShortestPathResult,
    distance_mismatches: Vec<Node>,
    predecessor_mismatches: Vec<Node>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let graph = match read_graph_with_spinner(&args.graph) {
        Ok(graph) => graph,
        Err(err) => {
            error!("{}", err);
            return ExitCode::FAILURE;
        }
    };
    if !graph.contains(&args.source) {
        error!("source {} is not part of the graph", args.source);
        return ExitCode::FAILURE;
    }

    let (bellman_ford, dijkstra) = if args.line_penalty {
        (BellmanFord::with_line_penalty(), Dijkstra::with_line_penalty())
    } else {
        (BellmanFord::new(), Dijkstra::new())
    };

    let sources = vec![args.source.clone(); args.runs.max(1) as usize];
    let bellman_ford_duration = benchmark(&bellman_ford, &graph, &sources);
    let dijkstra_duration = benchmark(&dijkstra, &graph, &sources);

    let bellman_ford_result = bellman_ford.solve(&graph, &args.source);
    let dijkstra_result = dijkstra.solve(&graph, &args.source);

    let comparison = Comparison {
        source: &args.source,
        bellman_ford: &bellman_ford_result,
        dijkstra: &dijkstra_result,
        distance_mismatches: distance_mismatches(
            &bellman_ford_result,
            &dijkstra_result,
            DISTANCE_TOLERANCE,
        ),
        predecessor_mismatches: predecessor_mismatches(&bellman_ford_result, &dijkstra_result),
    };

    if args.json {
        match serde_json::to_string_pretty(&comparison) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                error!("unable to serialize results: {}", err);
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    println!("{:<20}: {:?}", bellman_ford.name(), bellman_ford_duration);
    println!("{:<20}: {:?}", dijkstra.name(), dijkstra_duration);
    println!(
        "identical results: {}",
        if comparison.distance_mismatches.is_empty() && comparison.predecessor_mismatches.is_empty()
        {
            "yes"
        } else {
            "no"
        }
    );

    println!();
    println!(
        "{:<30} | {:>10} | {:>10} | {:<30} | {:<30}",
        "node", "dist bf", "dist dij", "pred bf", "pred dij"
    );
    println!("{}", "-".repeat(122));
    for node in graph.nodes() {
        let format_distance = |result: &ShortestPathResult| {
            result
                .get_distance(&node)
                .map_or("inf".to_string(), |distance| format!("{:.2}", distance))
        };
        println!(
            "{:<30} | {:>10} | {:>10} | {:<30} | {:<30}",
            node,
            format_distance(&bellman_ford_result),
            format_distance(&dijkstra_result),
            bellman_ford_result.get_predecessor(&node).unwrap_or("-"),
            dijkstra_result.get_predecessor(&node).unwrap_or("-"),
        );
    }

    ExitCode::SUCCESS
}
