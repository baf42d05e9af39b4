use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use log::error;
use transit_paths::{
    graphs::{small_test_graph, Graph},
    utility::read_graph_with_spinner,
};

/// Prints the outgoing arcs of every node. Without a file the small five
/// node example graph is printed.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Network file, one `tail<TAB>head<TAB>weight[<TAB>line]` arc per row
    #[arg(short, long)]
    graph: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let graph = match args.graph {
        Some(path) => match read_graph_with_spinner(&path) {
            Ok(graph) => graph,
            Err(err) => {
                error!("{}", err);
                return ExitCode::FAILURE;
            }
        },
        None => small_test_graph(),
    };

    println!(
        "{} nodes, {} arcs",
        graph.number_of_nodes(),
        graph.number_of_arcs()
    );
    print!("{}", graph);

    ExitCode::SUCCESS
}
