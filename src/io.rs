use crate::errors::ParseError;
use crate::graph::{Graph, Vertex};
use crate::graph_algos::Route;

use std::fmt::Display;
use std::str::FromStr;


/// Parse one graph record: a vertex count on the first line, then one edge
/// description per line. Blank lines are skipped.
pub fn parse_record<W>(text: &str) -> Result<Graph<W>, ParseError>
where
    W: Copy + FromStr,
{
    let mut lines = text.lines();

    let count_line = match lines.next() {
        Some(line) => line,
        None => return Err(ParseError::VertexCount(String::new())),
    };

    let vertex_count: usize = count_line
        .trim()
        .parse()
        .map_err(|_| ParseError::VertexCount(count_line.to_string()))?;

    Graph::from_descriptions(vertex_count, lines.filter(|line| !line.trim().is_empty()))
}

/// Result-file payload: the weight line, then the space-joined path
pub fn format_route<W: Display>(route: &Route<W>) -> String {
    format!("{}\n{} ", route.total_weight, join_path(&route.path))
}

/// Space-joined vertex labels, start to end
pub fn join_path(path: &[Vertex]) -> String {
    let labels: Vec<String> = path.iter().map(|vertex| vertex.to_string()).collect();

    labels.join(" ")
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_record() {
        let graph: Graph<u64> = parse_record("3\nA C 5\nC B 5\nA B 20\n").unwrap();

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edges().len(), 3);
        assert_eq!(graph.edge_weight('A', 'C'), Some(5));
    }

    #[test]
    fn skips_blank_lines() {
        let graph: Graph<u64> = parse_record("2\n\nA B 20\n\n").unwrap();

        assert_eq!(graph.edges().len(), 1);
    }

    #[test]
    fn reports_a_bad_count_line() {
        let result = parse_record::<u64>("twenty\nA B 20");
        assert_eq!(result.unwrap_err(), ParseError::VertexCount("twenty".to_string()));

        let result = parse_record::<u64>("");
        assert_eq!(result.unwrap_err(), ParseError::VertexCount(String::new()));
    }

    #[test]
    fn reports_a_bad_edge_line() {
        let result = parse_record::<u64>("2\nA B\n");
        assert_eq!(result.unwrap_err(), ParseError::Edge("A B".to_string()));
    }

    #[test]
    fn formats_the_result_payload() {
        let route = Route { path: vec!['A', 'C', 'B'], total_weight: 10u64 };

        assert_eq!(format_route(&route), "10\nA C B ");
    }

    #[test]
    fn joins_single_vertex_paths() {
        assert_eq!(join_path(&['A']), "A");
    }
}
