use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    city::Cities, distance_matrix::DistanceMatrix, error::RoutingError, network::RailwayNetwork,
};

#[derive(Error, Debug)]
pub enum MatrixFileError {
    #[error("Failed to read matrix file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Failed to parse matrix file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] RoutingError),
}

/// On-disk form of a distance matrix, the same shape the admin endpoint accepts.
#[derive(Serialize, Deserialize)]
pub struct MatrixDocument {
    pub matrix: DistanceMatrix,
}

pub fn read_matrix_file(path: &Path) -> Result<DistanceMatrix, MatrixFileError> {
    let content = std::fs::read_to_string(path)?;
    let document: MatrixDocument = serde_json::from_str(&content)?;
    Ok(document.matrix)
}

/// Reads a matrix file and pairs it with `cities`, which must have one entry per row.
pub fn read_network_file(path: &Path, cities: Cities) -> Result<RailwayNetwork, MatrixFileError> {
    let matrix = read_matrix_file(path)?;
    Ok(RailwayNetwork::new(cities, matrix)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_matrix_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("matrix.json");
        std::fs::write(&path, r#"{ "matrix": [[0, 12], [12, 0]] }"#).unwrap();

        let matrix = read_matrix_file(&path).unwrap();
        assert_eq!(matrix.rows(), vec![vec![0.0, 12.0], vec![12.0, 0.0]]);
    }

    #[test]
    fn test_read_matrix_file_errors() {
        let dir = tempfile::tempdir().unwrap();

        let missing = read_matrix_file(&dir.path().join("missing.json"));
        assert!(matches!(missing, Err(MatrixFileError::Read(_))));

        let path = dir.path().join("negative.json");
        std::fs::write(&path, r#"{ "matrix": [[0, -12], [12, 0]] }"#).unwrap();
        assert!(matches!(
            read_matrix_file(&path),
            Err(MatrixFileError::Parse(_))
        ));
    }

    #[test]
    fn test_read_network_file_checks_city_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("matrix.json");
        std::fs::write(&path, r#"{ "matrix": [[0, 12], [12, 0]] }"#).unwrap();

        assert!(matches!(
            read_network_file(&path, Cities::default()),
            Err(MatrixFileError::Invalid(RoutingError::CityCountMismatch {
                cities: 8,
                matrix: 2
            }))
        ));

        let cities = Cities::new(vec![String::from("Pune"), String::from("Nagpur")]);
        let network = read_network_file(&path, cities).unwrap();
        assert_eq!(network.find_routes("Pune", "Nagpur").unwrap()[0].distance, 12.0);
    }
}
