use crate::collections::FxIndexMap;
use crate::errors::ParseError;

use std::str::FromStr;


/// Vertices are single letters, 'A' up to the declared count
pub type Vertex = char;

/// Largest supported vertex count - the letters A-Z
pub const MAX_VERTICES: usize = 26;

/// Directed weighted arc between two vertices
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge<W> {
    pub source: Vertex,
    pub target: Vertex,
    pub weight: W,
}

impl<W: FromStr> Edge<W> {
    /// Decode one whitespace-separated `source target weight` description
    pub fn parse(description: &str) -> Result<Self, ParseError> {
        let malformed = || ParseError::Edge(description.to_string());

        let tokens: Vec<&str> = description.split_whitespace().collect();

        match tokens.as_slice() {
            &[source, target, weight] => {
                let source = letter_token(source).ok_or_else(malformed)?;
                let target = letter_token(target).ok_or_else(malformed)?;
                let weight = weight.parse().map_err(|_| malformed())?;

                Ok(Edge { source, target, weight })
            }
            _ => Err(malformed()),
        }
    }
}

/// A token is a vertex only if it is a single uppercase letter
fn letter_token(token: &str) -> Option<Vertex> {
    let mut chars = token.chars();

    match (chars.next(), chars.next()) {
        (Some(letter), None) if letter.is_ascii_uppercase() => Some(letter),
        _ => None,
    }
}

/// The first `count` letters of the alphabet in ascending order
pub(crate) fn letters(count: usize) -> impl Iterator<Item = Vertex> {
    (0..count as u8).map(|index| (b'A' + index) as char)
}


/// Directed weighted graph over the first `vertex_count` letters.
/// Edges keep their input order; the adjacency table derived from them
/// resolves duplicate (source, target) pairs to the last weight seen.
#[derive(Clone, Debug)]
pub struct Graph<W> {
    vertex_count: usize,
    edges: Vec<Edge<W>>,
    adjacency: FxIndexMap<Vertex, FxIndexMap<Vertex, W>>,
}

impl<W: Copy> Graph<W> {

    /// Build a graph from pre-parsed edges.
    /// The vertex count must be in 1..=26 and every edge endpoint must fall
    /// within the declared letters.
    pub fn new(vertex_count: usize, edges: Vec<Edge<W>>) -> Result<Self, ParseError> {
        if vertex_count < 1 || vertex_count > MAX_VERTICES {
            return Err(ParseError::VertexCount(vertex_count.to_string()));
        }

        // every declared vertex gets an adjacency entry, in ascending
        // letter order - this is the fixed enumeration order everywhere
        let mut adjacency: FxIndexMap<Vertex, FxIndexMap<Vertex, W>> = FxIndexMap::default();
        for vertex in letters(vertex_count) {
            adjacency.insert(vertex, FxIndexMap::default());
        }

        // walk edges in input order so a duplicate pair overwrites
        for edge in &edges {
            if !adjacency.contains_key(&edge.target) {
                return Err(ParseError::EndpointOutOfRange(endpoint_pair(edge)));
            }

            match adjacency.get_mut(&edge.source) {
                Some(neighbors) => {
                    neighbors.insert(edge.target, edge.weight);
                }
                None => return Err(ParseError::EndpointOutOfRange(endpoint_pair(edge))),
            }
        }

        Ok(Self { vertex_count, edges, adjacency })
    }

    /// Parse textual edge descriptions in order and build the graph
    pub fn from_descriptions<'a, I>(vertex_count: usize, descriptions: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = &'a str>,
        W: FromStr,
    {
        let edges = descriptions
            .into_iter()
            .map(Edge::parse)
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(vertex_count, edges)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Declared vertices in ascending letter order
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.adjacency.keys().copied()
    }

    /// Edges in input order
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    pub fn contains(&self, vertex: Vertex) -> bool {
        self.adjacency.contains_key(&vertex)
    }

    /// Outgoing neighbors of a vertex with their effective weights
    pub fn neighbors(&self, vertex: Vertex) -> impl Iterator<Item = (Vertex, W)> + '_ {
        self.adjacency
            .get(&vertex)
            .into_iter()
            .flat_map(|neighbors| neighbors.iter().map(|(&target, &weight)| (target, weight)))
    }

    /// Effective weight of the (source, target) arc - the last one in the
    /// edge sequence when duplicates exist
    pub fn edge_weight(&self, source: Vertex, target: Vertex) -> Option<W> {
        self.adjacency
            .get(&source)
            .and_then(|neighbors| neighbors.get(&target))
            .copied()
    }
}

fn endpoint_pair<W>(edge: &Edge<W>) -> String {
    format!("{} {}", edge.source, edge.target)
}
