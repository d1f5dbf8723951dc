use tracing::debug;

use crate::{
    city::{CityIdx, Cities},
    constants::MAX_ROUTE_OPTIONS,
    distance_matrix::DistanceMatrix,
};

use super::{
    dijkstra::Dijkstra,
    route_option::RouteOption,
    shortest_path::{ShortestPath, ShortestPathAlgorithm},
};

/// Returns up to [`MAX_ROUTE_OPTIONS`] routes from `source` to `destination`.
///
/// The first option is the shortest path and is flagged as best. Alternatives are
/// found by deleting one edge of the shortest path at a time (each deletion is
/// independent) and searching again; they keep the order in which their deleted
/// edge appears along the shortest path. Paths already collected are skipped.
/// An empty result means `destination` is unreachable.
pub fn find_alternative_routes(
    cities: &Cities,
    matrix: &DistanceMatrix,
    source: CityIdx,
    destination: CityIdx,
) -> Vec<RouteOption> {
    assert_eq!(
        cities.len(),
        matrix.num_cities(),
        "city list and distance matrix sizes differ"
    );

    let mut dijkstra = Dijkstra::new(matrix);

    let Some(primary) = dijkstra.calc_path(matrix, source, destination) else {
        debug!(%source, %destination, "no route");
        return Vec::new();
    };

    let mut routes = vec![RouteOption::new(
        cities.path_names(&primary.path),
        primary.distance,
        true,
    )];

    if primary.path.len() > 2 {
        for (from, to) in primary.edges() {
            let mut working_matrix = matrix.clone();
            working_matrix.remove_edge(from, to);

            let Some(alternative) = dijkstra.calc_path(&working_matrix, source, destination)
            else {
                debug!(%from, %to, "removing edge disconnects the route");
                continue;
            };

            push_if_new(&mut routes, cities, alternative);
        }
    }

    routes.truncate(MAX_ROUTE_OPTIONS);
    routes
}

fn push_if_new(routes: &mut Vec<RouteOption>, cities: &Cities, alternative: ShortestPath) {
    if !alternative.distance.is_finite() {
        return;
    }

    let path = cities.path_names(&alternative.path);
    if routes.iter().any(|route| route.path == path) {
        debug!(?path, "alternative already collected");
        return;
    }

    debug!(?path, distance = alternative.distance, "alternative");
    routes.push(RouteOption::new(path, alternative.distance, false));
}
