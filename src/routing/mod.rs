//! City network and shortest-route queries.
//!
//! `RoadNetwork` holds a weighted undirected graph of cities as a dense
//! adjacency matrix and answers minimum-distance route queries with
//! Dijkstra's algorithm.
//!
//! # Algorithm
//!
//! Repeated selection of the unvisited vertex with the smallest tentative
//! distance, relaxing all neighbors. O(V²) with linear-scan min selection —
//! adequate at city-network scale, no heap needed. Parent pointers
//! reconstruct one shortest path; ties are broken deterministically by the
//! lowest vertex index winning the min scan.
//!
//! # Reference
//! Dijkstra (1959), "A Note on Two Problems in Connexion with Graphs"

use crate::PlanError;

/// A shortest-route query result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Total edge weight along `path`.
    pub distance: i64,
    /// Vertex indices from source to destination inclusive.
    pub path: Vec<usize>,
}

/// Weighted undirected city network.
///
/// The vertex count is fixed at construction. `None` cells mean "no direct
/// edge"; the diagonal is zero (every city is at distance 0 from itself).
/// The matrix stays symmetric: adding an edge writes both directions, and a
/// parallel edge only replaces an existing weight when strictly smaller.
///
/// # Example
///
/// ```
/// use roadplan::routing::RoadNetwork;
///
/// let mut network = RoadNetwork::new(3);
/// network.add_edge(0, 1, 4).unwrap();
/// network.add_edge(1, 2, 5).unwrap();
///
/// let route = network.shortest_path(0, 2).unwrap().unwrap();
/// assert_eq!(route.distance, 9);
/// assert_eq!(route.path, vec![0, 1, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct RoadNetwork {
    vertices: usize,
    adjacency: Vec<Vec<Option<i64>>>,
}

impl RoadNetwork {
    /// Creates a network with `vertices` cities and no routes.
    pub fn new(vertices: usize) -> Self {
        let mut adjacency = vec![vec![None; vertices]; vertices];
        for (i, row) in adjacency.iter_mut().enumerate() {
            row[i] = Some(0);
        }
        Self {
            vertices,
            adjacency,
        }
    }

    /// Number of cities in the network.
    pub fn vertex_count(&self) -> usize {
        self.vertices
    }

    /// Adds an undirected route between two cities.
    ///
    /// The weight must be positive. A parallel edge keeps the minimum of
    /// the old and new weight.
    ///
    /// # Errors
    /// `OutOfRangeIndex` if either endpoint is not a valid city;
    /// `InvalidWeight` if `weight <= 0`.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: i64) -> Result<(), PlanError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if weight <= 0 {
            return Err(PlanError::InvalidWeight(weight));
        }

        match self.adjacency[from][to] {
            Some(existing) if existing <= weight => {}
            _ => {
                self.adjacency[from][to] = Some(weight);
                self.adjacency[to][from] = Some(weight);
            }
        }
        Ok(())
    }

    /// Direct edge weight between two cities, `None` if no direct route.
    ///
    /// # Errors
    /// `OutOfRangeIndex` if either endpoint is not a valid city.
    pub fn edge_weight(&self, from: usize, to: usize) -> Result<Option<i64>, PlanError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        Ok(self.adjacency[from][to])
    }

    /// Finds a minimum-distance route between two cities.
    ///
    /// Returns `Ok(None)` when the destination is unreachable — a valid
    /// result, not an error. `source == destination` yields a zero-distance
    /// single-vertex route.
    ///
    /// # Errors
    /// `OutOfRangeIndex` if source or destination is not a valid city.
    pub fn shortest_path(
        &self,
        source: usize,
        destination: usize,
    ) -> Result<Option<Route>, PlanError> {
        self.check_vertex(source)?;
        self.check_vertex(destination)?;

        let mut distance: Vec<Option<i64>> = vec![None; self.vertices];
        let mut previous: Vec<Option<usize>> = vec![None; self.vertices];
        let mut visited = vec![false; self.vertices];
        distance[source] = Some(0);

        loop {
            // Unvisited vertex with smallest tentative distance.
            let mut current: Option<(usize, i64)> = None;
            for v in 0..self.vertices {
                if visited[v] {
                    continue;
                }
                if let Some(d) = distance[v] {
                    if current.map_or(true, |(_, best)| d < best) {
                        current = Some((v, d));
                    }
                }
            }
            let Some((u, dist_u)) = current else { break };
            visited[u] = true;

            for v in 0..self.vertices {
                if visited[v] || v == u {
                    continue;
                }
                if let Some(w) = self.adjacency[u][v] {
                    let candidate = dist_u + w;
                    if distance[v].map_or(true, |d| candidate < d) {
                        distance[v] = Some(candidate);
                        previous[v] = Some(u);
                    }
                }
            }
        }

        let Some(total) = distance[destination] else {
            return Ok(None);
        };

        let mut path = vec![destination];
        let mut current = destination;
        while let Some(parent) = previous[current] {
            path.push(parent);
            current = parent;
        }
        path.reverse();

        Ok(Some(Route {
            distance: total,
            path,
        }))
    }

    fn check_vertex(&self, index: usize) -> Result<(), PlanError> {
        if index >= self.vertices {
            return Err(PlanError::OutOfRangeIndex {
                index,
                limit: self.vertices,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn sample_network() -> RoadNetwork {
        // 0 --4-- 1 --5-- 2
        //  \             /
        //   ----20------
        let mut network = RoadNetwork::new(3);
        network.add_edge(0, 1, 4).unwrap();
        network.add_edge(1, 2, 5).unwrap();
        network.add_edge(0, 2, 20).unwrap();
        network
    }

    #[test]
    fn test_shortest_path_prefers_two_hops() {
        let network = sample_network();
        let route = network.shortest_path(0, 2).unwrap().unwrap();
        assert_eq!(route.distance, 9);
        assert_eq!(route.path, vec![0, 1, 2]);
    }

    #[test]
    fn test_same_source_and_destination() {
        let network = sample_network();
        let route = network.shortest_path(1, 1).unwrap().unwrap();
        assert_eq!(route.distance, 0);
        assert_eq!(route.path, vec![1]);
    }

    #[test]
    fn test_unreachable_destination() {
        let mut network = RoadNetwork::new(4);
        network.add_edge(0, 1, 3).unwrap();
        // Vertices 2 and 3 form a separate component.
        network.add_edge(2, 3, 1).unwrap();

        assert_eq!(network.shortest_path(0, 2).unwrap(), None);
        assert_eq!(network.shortest_path(0, 3).unwrap(), None);
    }

    #[test]
    fn test_parallel_edge_keeps_minimum() {
        let mut network = RoadNetwork::new(2);
        network.add_edge(0, 1, 10).unwrap();
        network.add_edge(0, 1, 15).unwrap(); // Larger → ignored
        assert_eq!(network.edge_weight(0, 1).unwrap(), Some(10));
        assert_eq!(network.edge_weight(1, 0).unwrap(), Some(10));

        network.add_edge(1, 0, 6).unwrap(); // Smaller → replaces, both directions
        assert_eq!(network.edge_weight(0, 1).unwrap(), Some(6));
        assert_eq!(network.edge_weight(1, 0).unwrap(), Some(6));
    }

    #[test]
    fn test_edge_weight_none_without_route() {
        let network = RoadNetwork::new(3);
        assert_eq!(network.edge_weight(0, 2).unwrap(), None);
        assert_eq!(network.edge_weight(1, 1).unwrap(), Some(0));
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut network = RoadNetwork::new(3);
        assert_eq!(
            network.add_edge(0, 3, 1),
            Err(PlanError::OutOfRangeIndex { index: 3, limit: 3 })
        );
        assert_eq!(
            network.shortest_path(5, 0),
            Err(PlanError::OutOfRangeIndex { index: 5, limit: 3 })
        );
        assert_eq!(
            network.shortest_path(0, 5),
            Err(PlanError::OutOfRangeIndex { index: 5, limit: 3 })
        );
        // Matrix untouched by rejected writes.
        assert_eq!(network.edge_weight(0, 1).unwrap(), None);
    }

    #[test]
    fn test_non_positive_weight_rejected() {
        let mut network = RoadNetwork::new(2);
        assert_eq!(network.add_edge(0, 1, 0), Err(PlanError::InvalidWeight(0)));
        assert_eq!(
            network.add_edge(0, 1, -7),
            Err(PlanError::InvalidWeight(-7))
        );
        assert_eq!(network.edge_weight(0, 1).unwrap(), None);
    }

    #[test]
    fn test_reported_distance_matches_path_weights() {
        let mut network = RoadNetwork::new(5);
        network.add_edge(0, 1, 2).unwrap();
        network.add_edge(1, 2, 3).unwrap();
        network.add_edge(2, 4, 1).unwrap();
        network.add_edge(0, 3, 1).unwrap();
        network.add_edge(3, 4, 9).unwrap();

        let route = network.shortest_path(0, 4).unwrap().unwrap();
        let sum: i64 = route
            .path
            .windows(2)
            .map(|pair| network.edge_weight(pair[0], pair[1]).unwrap().unwrap())
            .sum();
        assert_eq!(route.distance, sum);
        assert_eq!(route.path.first(), Some(&0));
        assert_eq!(route.path.last(), Some(&4));
    }

    /// Exhaustive DFS over simple paths, for cross-checking Dijkstra.
    fn brute_force_distance(network: &RoadNetwork, source: usize, dest: usize) -> Option<i64> {
        fn dfs(
            network: &RoadNetwork,
            current: usize,
            dest: usize,
            seen: &mut Vec<bool>,
            acc: i64,
            best: &mut Option<i64>,
        ) {
            if current == dest {
                if best.map_or(true, |b| acc < b) {
                    *best = Some(acc);
                }
                return;
            }
            for next in 0..network.vertex_count() {
                if seen[next] || next == current {
                    continue;
                }
                if let Some(w) = network.edge_weight(current, next).unwrap() {
                    seen[next] = true;
                    dfs(network, next, dest, seen, acc + w, best);
                    seen[next] = false;
                }
            }
        }

        let mut seen = vec![false; network.vertex_count()];
        seen[source] = true;
        let mut best = None;
        dfs(network, source, dest, &mut seen, 0, &mut best);
        best
    }

    #[test]
    fn test_dijkstra_matches_brute_force_on_random_graphs() {
        let mut rng = StdRng::seed_from_u64(0x1207);
        for _ in 0..50 {
            let n = rng.random_range(2..7);
            let mut network = RoadNetwork::new(n);
            for u in 0..n {
                for v in (u + 1)..n {
                    if rng.random_bool(0.6) {
                        network.add_edge(u, v, rng.random_range(1..30)).unwrap();
                    }
                }
            }

            for source in 0..n {
                for dest in 0..n {
                    let expected = if source == dest {
                        Some(0)
                    } else {
                        brute_force_distance(&network, source, dest)
                    };
                    let actual = network
                        .shortest_path(source, dest)
                        .unwrap()
                        .map(|r| r.distance);
                    assert_eq!(actual, expected, "mismatch for {source}->{dest}");
                }
            }
        }
    }
}
