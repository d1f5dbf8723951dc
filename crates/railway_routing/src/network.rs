use crate::{
    city::{CityIdx, Cities},
    distance_matrix::DistanceMatrix,
    error::RoutingError,
    routing::{alternative_routes::find_alternative_routes, route_option::RouteOption},
};

/// A city list paired with the distance matrix over those cities.
#[derive(Debug, Clone, PartialEq)]
pub struct RailwayNetwork {
    cities: Cities,
    matrix: DistanceMatrix,
}

impl RailwayNetwork {
    pub fn new(cities: Cities, matrix: DistanceMatrix) -> Result<Self, RoutingError> {
        if cities.len() != matrix.num_cities() {
            return Err(RoutingError::CityCountMismatch {
                cities: cities.len(),
                matrix: matrix.num_cities(),
            });
        }

        Ok(RailwayNetwork { cities, matrix })
    }

    pub fn cities(&self) -> &Cities {
        &self.cities
    }

    pub fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    /// Same network with another matrix over the same cities.
    pub fn with_matrix(&self, matrix: DistanceMatrix) -> Result<Self, RoutingError> {
        RailwayNetwork::new(self.cities.clone(), matrix)
    }

    pub fn routes_between(&self, source: CityIdx, destination: CityIdx) -> Vec<RouteOption> {
        find_alternative_routes(&self.cities, &self.matrix, source, destination)
    }

    /// Resolves both city names and derives the route options between them.
    pub fn find_routes(
        &self,
        source: &str,
        destination: &str,
    ) -> Result<Vec<RouteOption>, RoutingError> {
        let (source, destination) = self.cities.resolve_pair(source, destination)?;
        Ok(self.routes_between(source, destination))
    }
}

impl Default for RailwayNetwork {
    fn default() -> Self {
        RailwayNetwork {
            cities: Cities::default(),
            matrix: DistanceMatrix::default(),
        }
    }
}
