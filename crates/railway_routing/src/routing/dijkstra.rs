use tracing::trace;

use crate::{
    city::CityIdx,
    distance_matrix::{Distance, DistanceMatrix},
};

use super::shortest_path::{ShortestPath, ShortestPathAlgorithm};

struct NodeData {
    distance: Distance,
    settled: bool,
    parent: Option<CityIdx>,
}

impl NodeData {
    fn new() -> Self {
        NodeData {
            distance: Distance::INFINITY,
            settled: false,
            parent: None,
        }
    }
}

/// Dense O(N²) Dijkstra over a distance matrix.
///
/// The next node to settle is found by a linear scan in ascending index order;
/// the first node holding the minimum tentative distance wins, which keeps the
/// chosen path deterministic when several shortest paths exist.
pub struct Dijkstra {
    data: Vec<NodeData>,
}

impl Dijkstra {
    pub fn new(matrix: &DistanceMatrix) -> Self {
        Dijkstra {
            data: Vec::with_capacity(matrix.num_cities()),
        }
    }

    fn init(&mut self, num_cities: usize, start: CityIdx) {
        self.data.clear();
        self.data.resize_with(num_cities, NodeData::new);
        self.data[start].distance = 0.0;
    }

    fn min_unsettled_node(&self) -> Option<CityIdx> {
        let mut min_distance = Distance::INFINITY;
        let mut min_node = None;

        for (index, node) in self.data.iter().enumerate() {
            if !node.settled && node.distance < min_distance {
                min_distance = node.distance;
                min_node = Some(CityIdx::new(index));
            }
        }

        min_node
    }

    fn build_path(&self, start: CityIdx, end: CityIdx) -> Option<ShortestPath> {
        let mut path = vec![end];
        let mut node = end;

        while let Some(parent) = self.data[node].parent {
            path.push(parent);
            node = parent;
        }

        path.reverse();

        // The walk only reaches `start` when `end` was labelled from it.
        if path[0] != start {
            return None;
        }

        Some(ShortestPath {
            distance: self.data[end].distance,
            path,
        })
    }
}

impl ShortestPathAlgorithm for Dijkstra {
    fn calc_path(
        &mut self,
        matrix: &DistanceMatrix,
        start: CityIdx,
        end: CityIdx,
    ) -> Option<ShortestPath> {
        let num_cities = matrix.num_cities();
        assert!(
            start.get() < num_cities,
            "Dijkstra: start node {start} is out of range for {num_cities} cities"
        );
        assert!(
            end.get() < num_cities,
            "Dijkstra: end node {end} is out of range for {num_cities} cities"
        );

        self.init(num_cities, start);

        for _ in 0..num_cities.saturating_sub(1) {
            let Some(node) = self.min_unsettled_node() else {
                break;
            };

            self.data[node].settled = true;
            let node_distance = self.data[node].distance;
            trace!(%node, distance = node_distance, "settled");

            for adj_index in 0..num_cities {
                let adj_node = CityIdx::new(adj_index);
                if self.data[adj_node].settled || !matrix.has_edge(node, adj_node) {
                    continue;
                }

                let next_distance = node_distance + matrix.weight(node, adj_node);
                if next_distance < self.data[adj_node].distance {
                    self.data[adj_node].distance = next_distance;
                    self.data[adj_node].parent = Some(node);
                }
            }
        }

        self.build_path(start, end)
    }
}
