use std::{path::PathBuf, process::ExitCode, time::Instant};

use clap::{Parser, ValueEnum};
use itertools::Itertools;
use log::{error, info};
use transit_paths::{
    graphs::Graph,
    search::{bellman_ford::BellmanFord, dijkstra::Dijkstra, ShortestPathSolver},
    utility::read_graph_with_spinner,
};

#[derive(Debug, ValueEnum, Clone)]
enum Algorithm {
    BellmanFord,
    Dijkstra,
}

/// Prints shortest routes from one station to one or more destinations.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Network file, one `tail<TAB>head<TAB>weight[<TAB>line]` arc per row
    #[arg(short, long)]
    graph: PathBuf,
    /// Departure station
    #[arg(short, long)]
    from: String,
    /// Destination stations
    #[arg(short, long, required = true, num_args = 1..)]
    to: Vec<String>,
    #[arg(short, long, value_enum, default_value = "dijkstra")]
    algorithm: Algorithm,
    /// Charge a fixed penalty for changing lines
    #[arg(short, long)]
    line_penalty: bool,
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
    if !graph.contains(&args.from) {
        error!("station {} is not part of the network", args.from);
        return ExitCode::FAILURE;
    }

    let solver: Box<dyn ShortestPathSolver> = match (args.algorithm, args.line_penalty) {
        (Algorithm::BellmanFord, false) => Box::new(BellmanFord::new()),
        (Algorithm::BellmanFord, true) => Box::new(BellmanFord::with_line_penalty()),
        (Algorithm::Dijkstra, false) => Box::new(Dijkstra::new()),
        (Algorithm::Dijkstra, true) => Box::new(Dijkstra::with_line_penalty()),
    };

    let start = Instant::now();
    let result = solver.solve(&graph, &args.from);
    info!("{} took {:?}", solver.name(), start.elapsed());

    for destination in args.to.iter() {
        match result.get_path(destination) {
            Some(path) => println!(
                "{} -> {} ({:.2}): {}",
                args.from,
                destination,
                path.distance,
                path.nodes.iter().join(" > ")
            ),
            None => println!("{} -> {}: unreachable", args.from, destination),
        }
    }

    ExitCode::SUCCESS
}
