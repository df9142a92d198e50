//! Cities with names and travel durations between them, and the glue that
//! turns such a network into a [`VecVecGraph`] and renders results.

use std::{fs::File, io::BufReader, ops::Range, path::Path as FilePath};

use ahash::{HashMap, HashMapExt};
use itertools::Itertools;
use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};

use crate::{
    error::{GraphError, Result},
    graphs::{
        graph_factory::GraphFactory, vec_vec_graph::VecVecGraph, Distance, Edge, Graph, VertexId,
        Weight, WeightedEdge,
    },
    search::path::Path,
};

const AIRPORT_NAMES: [&str; 10] = [
    "John F. Kennedy International Airport",
    "Los Angeles International Airport",
    "Chicago O'Hare International Airport",
    "Hartsfield-Jackson Atlanta International Airport",
    "Dallas/Fort Worth International Airport",
    "Denver International Airport",
    "Heathrow Airport",
    "Beijing Capital International Airport",
    "Tokyo Haneda Airport",
    "Dubai International Airport",
];

pub const DEFAULT_DURATIONS: Range<Weight> = 100..500;

/// A connection as read from a description file. The duration is signed so
/// that negative values are rejected with a proper error instead of a parse
/// failure.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Connection {
    pub from: u32,
    pub to: u32,
    pub duration: i64,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NetworkDescription {
    pub cities: Vec<String>,
    pub connections: Vec<Connection>,
}

pub struct Network {
    names: Vec<String>,
    index: HashMap<String, VertexId>,
    graph: VecVecGraph,
}

impl Network {
    pub fn new(names: Vec<String>, graph: VecVecGraph) -> Result<Network> {
        if names.len() != graph.number_of_vertices() as usize {
            return Err(GraphError::InvalidArgument(format!(
                "{} names given for {} cities",
                names.len(),
                graph.number_of_vertices()
            )));
        }

        let mut index = HashMap::with_capacity(names.len());
        for (vertex, name) in names.iter().enumerate() {
            // first city wins if names repeat
            index.entry(name.to_lowercase()).or_insert(vertex as VertexId);
        }

        Ok(Network { names, index, graph })
    }

    pub fn from_description(description: &NetworkDescription) -> Result<Network> {
        let number_of_vertices = description.cities.len() as u32;
        let edges = description
            .connections
            .iter()
            .map(|connection| {
                let weight = Weight::try_from(connection.duration)
                    .ok()
                    .filter(|&weight| weight > 0)
                    .ok_or_else(|| {
                        GraphError::InvalidArgument(format!(
                            "duration {} between {} and {} must be a positive number of minutes",
                            connection.duration, connection.from, connection.to
                        ))
                    })?;
                Ok(WeightedEdge::new(connection.from, connection.to, weight))
            })
            .collect::<Result<Vec<_>>>()?;

        let graph = VecVecGraph::from_edges(number_of_vertices, &edges)?;
        Network::new(description.cities.clone(), graph)
    }

    pub fn from_json_file(path: &FilePath) -> Result<Network> {
        let reader = BufReader::new(File::open(path)?);
        let description: NetworkDescription = serde_json::from_reader(reader)?;
        tracing::info!(
            path = %path.display(),
            cities = description.cities.len(),
            connections = description.connections.len(),
            "read network"
        );
        Network::from_description(&description)
    }

    /// Every pair of cities connected with a duration drawn from `durations`,
    /// cities named after randomly picked airports.
    pub fn random<R: Rng>(
        number_of_cities: u32,
        durations: Range<Weight>,
        rng: &mut R,
    ) -> Result<Network> {
        let names = (0..number_of_cities)
            .map(|city| {
                let airport = AIRPORT_NAMES.choose(&mut *rng).copied().unwrap_or("Airport");
                format!("{} #{}", airport, city + 1)
            })
            .collect_vec();
        let graph = GraphFactory::random_complete(number_of_cities, durations, rng)?;
        Network::new(names, graph)
    }

    pub fn to_description(&self) -> NetworkDescription {
        let connections = crate::graphs::all_edges(&self.graph)
            .into_iter()
            .map(|edge| Connection {
                from: edge.tail,
                to: edge.head,
                duration: edge.weight as i64,
            })
            .collect();

        NetworkDescription {
            cities: self.names.clone(),
            connections,
        }
    }

    pub fn graph(&self) -> &VecVecGraph {
        &self.graph
    }

    pub fn name(&self, city: VertexId) -> &str {
        self.names
            .get(city as usize)
            .map(String::as_str)
            .unwrap_or("<unknown>")
    }

    /// Finds a city by its name (case insensitive) or by its 1-based position.
    pub fn lookup(&self, query: &str) -> Result<VertexId> {
        let query = query.trim();
        if let Some(&city) = self.index.get(&query.to_lowercase()) {
            return Ok(city);
        }

        match query.parse::<u32>() {
            Ok(position) if (1..=self.names.len() as u32).contains(&position) => Ok(position - 1),
            _ => Err(GraphError::UnknownCity(query.to_string())),
        }
    }

    /// `A -> B -> C`
    pub fn route(&self, path: &Path) -> String {
        path.vertices
            .iter()
            .map(|&city| self.name(city))
            .join(" -> ")
    }

    /// Renders the outcome of a query the way it is shown to a user.
    pub fn describe(&self, path: &Option<Path>) -> String {
        match path {
            Some(path) => format!("{} ({} minutes)", self.route(path), path.distance),
            None => "No path found".to_string(),
        }
    }

    /// Tab separated duration matrix, `INF` where two cities are not directly
    /// connected.
    pub fn duration_matrix(&self) -> String {
        self.graph
            .vertices()
            .map(|tail| {
                self.graph
                    .vertices()
                    .map(|head| {
                        if tail == head {
                            return "0".to_string();
                        }
                        match self.graph.get_weight(&Edge { tail, head }) {
                            Some(weight) => weight.to_string(),
                            None => "INF".to_string(),
                        }
                    })
                    .join("\t")
            })
            .join("\n")
    }
}

pub fn format_distance(distance: Option<Distance>) -> String {
    match distance {
        Some(distance) => format!("{} minutes", distance),
        None => "No path found".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn description() -> NetworkDescription {
        NetworkDescription {
            cities: vec![
                "Denver".to_string(),
                "Tokyo".to_string(),
                "Dubai".to_string(),
            ],
            connections: vec![
                Connection {
                    from: 0,
                    to: 1,
                    duration: 300,
                },
                Connection {
                    from: 1,
                    to: 2,
                    duration: 200,
                },
            ],
        }
    }

    #[test]
    fn lookup_by_name_or_position() {
        let network = Network::from_description(&description()).unwrap();

        assert_eq!(network.lookup("tokyo").unwrap(), 1);
        assert_eq!(network.lookup(" Dubai ").unwrap(), 2);
        assert_eq!(network.lookup("1").unwrap(), 0);
        assert!(matches!(
            network.lookup("4"),
            Err(GraphError::UnknownCity(_))
        ));
        assert!(network.lookup("0").is_err());
        assert!(network.lookup("Paris").is_err());
    }

    #[test]
    fn invalid_durations_are_rejected() {
        for duration in [0, -5, i64::from(u32::MAX) + 1] {
            let mut description = description();
            description.connections[0].duration = duration;
            assert!(matches!(
                Network::from_description(&description),
                Err(GraphError::InvalidArgument(_))
            ));
        }

        let mut description = description();
        description.connections[0].to = 7;
        assert!(Network::from_description(&description).is_err());
    }

    #[test]
    fn json_roundtrip_keeps_network() {
        let network = Network::from_description(&description()).unwrap();
        let json = serde_json::to_string(&network.to_description()).unwrap();
        let parsed: NetworkDescription = serde_json::from_str(&json).unwrap();
        let reparsed = Network::from_description(&parsed).unwrap();

        assert_eq!(reparsed.duration_matrix(), network.duration_matrix());
        assert_eq!(network.duration_matrix(), "0\t300\tINF\n300\t0\t200\nINF\t200\t0");
    }

    #[test]
    fn rendering() {
        let network = Network::from_description(&description()).unwrap();
        let path = Path {
            vertices: vec![0, 1, 2],
            distance: 500,
        };

        assert_eq!(
            network.describe(&Some(path)),
            "Denver -> Tokyo -> Dubai (500 minutes)"
        );
        assert_eq!(network.describe(&None), "No path found");
        assert_eq!(format_distance(Some(5)), "5 minutes");
    }

    #[test]
    fn random_network_has_a_name_per_city() {
        let network = Network::random(5, DEFAULT_DURATIONS, &mut StdRng::seed_from_u64(2)).unwrap();
        assert_eq!(network.graph().number_of_edges(), 10);
        assert!(network.name(4).ends_with("#5"));
        assert_eq!(network.lookup(network.name(3)).unwrap(), 3);
    }
}
