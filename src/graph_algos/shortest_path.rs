use crate::errors::PathError;
use crate::graph::{Graph, Vertex};
use super::{PredecessorMap, Route};

use num_traits::Zero;


/// Construct the route from the recorded predecessors.
/// Walks backward from end until the path-head marker, then reverses.
/// The total weight re-sums the effective (last parsed) weight of each
/// traversed arc.
pub(crate) fn shortest_path<W>(
    graph: &Graph<W>,
    predecessors: &PredecessorMap,
    start: Vertex,
    end: Vertex,
) -> Result<Route<W>, PathError>
where
    W: Zero + Copy,
{
    let mut path = vec![end];
    let mut total_weight = W::zero();
    let mut current = end;

    // Trace back from end to start
    while current != start {
        let previous = match predecessors.get(&current) {
            Some(&Some(previous)) => previous,
            // an absent entry means the scan never reached this vertex
            _ => return Err(PathError::Unreachable(end)),
        };

        // a predecessor is only ever recorded along an existing arc
        let weight = graph.edge_weight(previous, current).unwrap();
        total_weight = total_weight + weight;

        path.push(previous);
        current = previous;
    }

    // The path was built in reverse order, so reverse it
    path.reverse();

    Ok(Route { path, total_weight })
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;

    fn predecessors(entries: &[(Vertex, Option<Vertex>)]) -> PredecessorMap {
        entries.iter().copied().collect()
    }

    #[test]
    fn walks_the_predecessor_chain() {
        let graph = Graph::new(
            3,
            vec![
                Edge { source: 'A', target: 'C', weight: 5u64 },
                Edge { source: 'C', target: 'B', weight: 5 },
            ],
        )
        .unwrap();

        let table = predecessors(&[('A', None), ('C', Some('A')), ('B', Some('C'))]);

        let route = shortest_path(&graph, &table, 'A', 'B').unwrap();

        assert_eq!(route.path, vec!['A', 'C', 'B']);
        assert_eq!(route.total_weight, 10);
    }

    #[test]
    fn start_alone_is_a_route() {
        let graph = Graph::<u64>::new(1, vec![]).unwrap();

        let table = predecessors(&[('A', None)]);

        let route = shortest_path(&graph, &table, 'A', 'A').unwrap();

        assert_eq!(route.path, vec!['A']);
        assert_eq!(route.total_weight, 0);
    }

    #[test]
    fn missing_entry_is_unreachable() {
        let graph = Graph::<u64>::new(2, vec![]).unwrap();

        let table = predecessors(&[('A', None)]);

        assert_eq!(
            shortest_path(&graph, &table, 'A', 'B'),
            Err(PathError::Unreachable('B'))
        );
    }
}
