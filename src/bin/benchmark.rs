use std::{
    process::ExitCode,
    time::{Duration, Instant},
};

use clap::Parser;
use indicatif::ProgressIterator;
use rand::{rngs::StdRng, SeedableRng};
use travel_paths::{
    graphs::{graph_factory::GraphFactory, Graph},
    logging,
    network::DEFAULT_DURATIONS,
    search::{
        alt::landmark::Landmarks, astar::AStar, dijkstra::Dijkstra, floyd_warshall::floyd_warshall,
        path::validate_path, PathFinding,
    },
    utility::{get_progressbar, random_request},
    Result,
};

/// Times the three algorithms on random requests over a random network and
/// checks that they agree.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of cities of the generated network
    #[arg(short, long, default_value_t = 200)]
    cities: u32,

    /// Probability that two cities are directly connected
    #[arg(short, long, default_value_t = 0.1)]
    edge_probability: f64,

    /// Number of benchmarks to be run.
    #[arg(short, long, default_value_t = 1_000)]
    number_of_benchmarks: u32,

    /// Number of landmarks used by A*
    #[arg(short, long, default_value_t = 4)]
    landmarks: u32,

    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(error) = logging::init(args.verbose) {
        eprintln!("could not set up logging: {}", error);
    }

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("error: {}", error);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<bool> {
    let mut rng = StdRng::seed_from_u64(args.seed);
    let graph = GraphFactory::random(
        args.cities,
        DEFAULT_DURATIONS,
        args.edge_probability,
        &mut rng,
    )?;
    println!(
        "network with {} cities and {} connections",
        graph.number_of_vertices(),
        graph.number_of_edges()
    );

    let start = Instant::now();
    let all_pairs = floyd_warshall(&graph);
    println!("floyd warshall took {:?}", start.elapsed());

    let start = Instant::now();
    let landmarks = Landmarks::farthest(&graph, args.landmarks, &mut rng)?;
    println!(
        "{} landmarks took {:?}",
        landmarks.landmarks.len(),
        start.elapsed()
    );

    let dijkstra = Dijkstra::new(&graph);
    let astar = AStar::new(&graph, &landmarks);
    let pathfinders: [(&str, &dyn PathFinding); 3] = [
        ("dijkstra", &dijkstra),
        ("astar", &astar),
        ("floyd warshall", &all_pairs),
    ];

    let mut durations = [Duration::ZERO; 3];
    let mut failures = 0;

    let bar = get_progressbar("Running benchmarks", args.number_of_benchmarks as u64);
    for _ in (0..args.number_of_benchmarks).progress_with(bar) {
        let Some(request) = random_request(graph.number_of_vertices(), &mut rng) else {
            break;
        };
        let expected = all_pairs.get_distance(request.source, request.target);

        for (index, (name, pathfinder)) in pathfinders.iter().enumerate() {
            let start = Instant::now();
            let path = pathfinder.shortest_path(&request)?;
            durations[index] += start.elapsed();

            if let Err(reason) = validate_path(&graph, &request, expected, &path) {
                failures += 1;
                tracing::error!(?request, algorithm = %name, %reason, "wrong result");
            }
        }
    }

    for ((name, _), duration) in pathfinders.iter().zip(durations) {
        println!(
            "{:>15}: average {:?}",
            name,
            duration / args.number_of_benchmarks.max(1)
        );
    }

    if failures > 0 {
        println!("{} wrong results", failures);
    }

    Ok(failures == 0)
}
