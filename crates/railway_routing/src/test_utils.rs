use crate::{
    city::{CityIdx, Cities},
    distance_matrix::{Distance, DistanceMatrix},
};

/// Index of a default city, panicking on typos in tests.
pub fn city(name: &str) -> usize {
    Cities::default()
        .index_of(name)
        .unwrap_or_else(|| panic!("unknown test city {name}"))
        .get()
}

pub fn names(cities: &[&str]) -> Vec<String> {
    cities.iter().map(|city| city.to_string()).collect()
}

/// Two components, {0, 1} and {2, 3}.
pub fn disconnected_matrix() -> DistanceMatrix {
    DistanceMatrix::new(vec![
        vec![0.0, 4.0, 0.0, 0.0],
        vec![4.0, 0.0, 0.0, 0.0],
        vec![0.0, 0.0, 0.0, 9.0],
        vec![0.0, 0.0, 9.0, 0.0],
    ])
    .unwrap()
}

/// A path graph 0 - 1 - ... - n where `weights[i]` connects `i` and `i + 1`.
pub fn line_matrix(weights: &[Distance]) -> DistanceMatrix {
    let num_cities = weights.len() + 1;
    let mut rows = vec![vec![0.0; num_cities]; num_cities];

    for (i, &weight) in weights.iter().enumerate() {
        rows[i][i + 1] = weight;
        rows[i + 1][i] = weight;
    }

    DistanceMatrix::new(rows).unwrap()
}

/// Shortest distance found by enumerating every simple path.
pub fn brute_force_shortest_distance(
    matrix: &DistanceMatrix,
    start: usize,
    end: usize,
) -> Option<Distance> {
    fn visit(
        matrix: &DistanceMatrix,
        node: usize,
        end: usize,
        distance: Distance,
        visited: &mut Vec<bool>,
        best: &mut Option<Distance>,
    ) {
        if node == end {
            if best.is_none_or(|best| distance < best) {
                *best = Some(distance);
            }
            return;
        }

        for next in 0..matrix.num_cities() {
            if visited[next] || !matrix.has_edge(CityIdx::new(node), CityIdx::new(next)) {
                continue;
            }

            visited[next] = true;
            let weight = matrix.weight(CityIdx::new(node), CityIdx::new(next));
            visit(matrix, next, end, distance + weight, visited, best);
            visited[next] = false;
        }
    }

    let mut visited = vec![false; matrix.num_cities()];
    visited[start] = true;
    let mut best = None;
    visit(matrix, start, end, 0.0, &mut visited, &mut best);
    best
}
