use clap::Parser;
use rand::{rngs::StdRng, thread_rng, SeedableRng};
use transit_paths::{
    search::{bellman_ford::BellmanFord, dijkstra::Dijkstra, ShortestPathSolver},
    utility::{benchmark, random_graph, random_sources},
};

/// Does a single threaded benchmark of all solvers on a random graph.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short = 'n', long, default_value = "300")]
    number_of_nodes: u32,
    #[arg(short = 'm', long, default_value = "1200")]
    number_of_arcs: u32,
    /// Number of lines the arcs are spread over, 0 for untagged arcs
    #[arg(short, long, default_value = "14")]
    lines: u32,
    /// Number of benchmarks to be run per solver
    #[arg(short = 'b', long, default_value = "100")]
    number_of_benchmarks: u32,
    /// Seed for a reproducible graph
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(thread_rng()).unwrap_or_else(|_| StdRng::seed_from_u64(0)),
    };

    let line_names: Vec<String> = (1..=args.lines).map(|line| line.to_string()).collect();
    let lines: Vec<&str> = line_names.iter().map(String::as_str).collect();
    let graph = random_graph(
        &mut rng,
        args.number_of_nodes,
        args.number_of_arcs,
        &lines,
    );
    let sources = random_sources(&mut rng, &graph, args.number_of_benchmarks);

    let solvers: Vec<Box<dyn ShortestPathSolver>> = vec![
        Box::new(BellmanFord::new()),
        Box::new(Dijkstra::new()),
        Box::new(BellmanFord::with_line_penalty()),
        Box::new(Dijkstra::with_line_penalty()),
    ];

    println!("Value over {} sequential searches", sources.len());
    for solver in solvers.iter() {
        let average_duration = benchmark(solver.as_ref(), &graph, &sources);
        println!(
            "Average {} duration is {:?}",
            solver.name(),
            average_duration
        );
    }
}
