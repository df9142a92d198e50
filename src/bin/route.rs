use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, ValueEnum};
use rand::{rngs::StdRng, SeedableRng};
use travel_paths::{
    graphs::{Graph, VertexId, Weight},
    logging,
    network::{format_distance, Network, DEFAULT_DURATIONS},
    search::{
        alt::landmark::Landmarks, astar::astar_one_to_one, collections::dijkstra_data::DijkstraData,
        dijkstra::dijkstra_one_to_all, floyd_warshall::floyd_warshall, DistanceHeuristic,
        TrivialHeuristic,
    },
    Result,
};

#[derive(Debug, ValueEnum, Clone, Copy, PartialEq, Eq)]
enum Algorithm {
    Dijkstra,
    Astar,
    FloydWarshall,
    All,
}

/// Finds the fastest route between two cities.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Network description in JSON format
    #[arg(short, long, conflicts_with = "cities")]
    network: Option<PathBuf>,

    /// Generate a random network with this many cities instead
    #[arg(short, long)]
    cities: Option<u32>,

    /// Seed for the random network
    #[arg(long, env = "TRAVEL_PATHS_SEED")]
    seed: Option<u64>,

    /// Shortest duration of a generated connection in minutes
    #[arg(long, default_value_t = DEFAULT_DURATIONS.start)]
    min_duration: Weight,

    /// Longest duration of a generated connection in minutes (exclusive)
    #[arg(long, default_value_t = DEFAULT_DURATIONS.end)]
    max_duration: Weight,

    /// Starting city, by name or 1-based position
    #[arg(short, long)]
    source: String,

    /// Destination city, by name or 1-based position
    #[arg(short, long)]
    target: String,

    #[arg(short, long, value_enum, default_value_t = Algorithm::All)]
    algorithm: Algorithm,

    /// Number of landmarks for the A* heuristic, 0 searches without one
    #[arg(short, long, default_value_t = 0)]
    landmarks: u32,

    /// Print the duration matrix of the network
    #[arg(long)]
    print_matrix: bool,

    /// Write the (generated) network to this file as JSON
    #[arg(long)]
    write_network: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(error) = logging::init(args.verbose) {
        eprintln!("could not set up logging: {}", error);
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {}", error);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let network = match (&args.network, args.cities) {
        (Some(path), _) => Network::from_json_file(path)?,
        (None, Some(cities)) => {
            Network::random(cities, args.min_duration..args.max_duration, &mut rng)?
        }
        (None, None) => {
            return Err(travel_paths::GraphError::InvalidArgument(
                "either --network or --cities is required".to_string(),
            ))
        }
    };

    if let Some(path) = &args.write_network {
        let writer = std::io::BufWriter::new(std::fs::File::create(path)?);
        serde_json::to_writer_pretty(writer, &network.to_description())?;
    }

    if args.print_matrix {
        println!("Duration Matrix:");
        println!("{}", network.duration_matrix());
    }

    let source = network.lookup(&args.source)?;
    let target = network.lookup(&args.target)?;
    let graph = network.graph();

    println!(
        "Shortest path from {} to {}:",
        network.name(source),
        network.name(target)
    );

    if matches!(args.algorithm, Algorithm::Dijkstra | Algorithm::All) {
        let data = dijkstra_one_to_all(graph, source)?;
        println!("Dijkstra: {}", network.describe(&data.get_path(target)));
    }

    if matches!(args.algorithm, Algorithm::Astar | Algorithm::All) {
        let heuristic: Box<dyn DistanceHeuristic> = if args.landmarks > 0 {
            Box::new(Landmarks::farthest(graph, args.landmarks, &mut rng)?)
        } else {
            Box::new(TrivialHeuristic {})
        };
        let data = astar_one_to_one(graph, heuristic.as_ref(), source, target)?;
        println!(
            "A*: {} [{} of {} cities expanded]",
            network.describe(&data.path()),
            data.number_of_expanded(),
            graph.number_of_vertices()
        );
    }

    if matches!(args.algorithm, Algorithm::FloydWarshall | Algorithm::All) {
        let data = floyd_warshall(graph);
        println!("Floyd-Warshall: {}", network.describe(&data.get_path(source, target)?));
        print_distances_from(&network, source, data.distances_from(source));
    }

    Ok(())
}

fn print_distances_from(
    network: &Network,
    source: VertexId,
    distances: &[Option<travel_paths::graphs::Distance>],
) {
    println!("All durations from {}:", network.name(source));
    for (city, &distance) in distances.iter().enumerate() {
        println!("  {}: {}", network.name(city as VertexId), format_distance(distance));
    }
}
