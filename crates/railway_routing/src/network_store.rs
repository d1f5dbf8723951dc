use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{info, warn};

use crate::{distance_matrix::DistanceMatrix, error::RoutingError, network::RailwayNetwork};

/// Holds the current railway network.
///
/// Readers take an [`Arc`] snapshot and route against it without holding the
/// lock; an administrative [`NetworkStore::replace`] swaps in a new network
/// atomically and never mutates a snapshot already handed out.
pub struct NetworkStore {
    current: RwLock<Arc<RailwayNetwork>>,
}

impl NetworkStore {
    pub fn new(network: RailwayNetwork) -> Self {
        NetworkStore {
            current: RwLock::new(Arc::new(network)),
        }
    }

    pub fn snapshot(&self) -> Arc<RailwayNetwork> {
        Arc::clone(&self.current.read())
    }

    pub fn matrix(&self) -> DistanceMatrix {
        self.snapshot().matrix().clone()
    }

    /// Replaces the distance matrix. The city list is fixed, so the matrix must
    /// keep the same number of cities.
    pub fn replace(&self, matrix: DistanceMatrix) -> Result<(), RoutingError> {
        if !matrix.is_symmetric() {
            warn!("replacing network with an asymmetric distance matrix");
        }

        let mut current = self.current.write();
        let network = current.with_matrix(matrix)?;
        *current = Arc::new(network);

        info!("railway network updated");
        Ok(())
    }
}

impl Default for NetworkStore {
    fn default() -> Self {
        NetworkStore::new(RailwayNetwork::default())
    }
}

#[cfg(test)]
mod tests {
    use crate::city::CityIdx;

    use super::*;

    #[test]
    fn test_snapshot_survives_replace() {
        let store = NetworkStore::default();
        let before = store.snapshot();

        let mut rows = before.matrix().rows();
        rows[0][3] = 10.0;
        rows[3][0] = 10.0;
        store.replace(DistanceMatrix::new(rows).unwrap()).unwrap();

        assert_eq!(
            before.matrix().weight(CityIdx::new(0), CityIdx::new(3)),
            1153.0
        );
        assert_eq!(store.matrix().weight(CityIdx::new(0), CityIdx::new(3)), 10.0);
        assert_eq!(
            store.snapshot().find_routes("Mumbai", "Delhi").unwrap()[0].distance,
            10.0
        );
    }

    #[test]
    fn test_replace_rejects_wrong_size() {
        let store = NetworkStore::default();
        let matrix = DistanceMatrix::new(vec![vec![0.0]]).unwrap();

        assert_eq!(
            store.replace(matrix),
            Err(RoutingError::CityCountMismatch {
                cities: 8,
                matrix: 1
            })
        );
        assert_eq!(store.matrix(), DistanceMatrix::default());
    }
}
