use serde::{Deserialize, Serialize};

use crate::{city::CityIdx, constants::DEFAULT_RAILWAY_MATRIX, error::RoutingError};

pub type Distance = f64;

/// Dense N×N distance matrix of an undirected railway network.
///
/// Stored as a flat row-major vector: the weight between `from` and `to` lives at
/// `from * num_cities + to`. A weight of `0` between two distinct cities means
/// there is no direct connection; the diagonal is never traversed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Distance>>", into = "Vec<Vec<Distance>>")]
pub struct DistanceMatrix {
    distances: Vec<Distance>,
    num_cities: usize,
}

impl DistanceMatrix {
    /// Builds a matrix from nested rows. Rows must form a square and every value
    /// must be a finite, non-negative number.
    pub fn new(rows: Vec<Vec<Distance>>) -> Result<Self, RoutingError> {
        let num_cities = rows.len();
        Self::with_size(num_cities, rows)
    }

    /// Same as [`DistanceMatrix::new`] but also requires exactly `num_cities` rows.
    pub fn with_size(num_cities: usize, rows: Vec<Vec<Distance>>) -> Result<Self, RoutingError> {
        if rows.len() != num_cities || rows.iter().any(|row| row.len() != num_cities) {
            return Err(RoutingError::InvalidDimensions {
                expected: num_cities,
            });
        }

        for (row, values) in rows.iter().enumerate() {
            for (column, &value) in values.iter().enumerate() {
                if !value.is_finite() {
                    return Err(RoutingError::NonFiniteWeight { row, column, value });
                }
                if value < 0.0 {
                    return Err(RoutingError::NegativeWeight { row, column, value });
                }
            }
        }

        Ok(DistanceMatrix {
            distances: rows.into_iter().flatten().collect(),
            num_cities,
        })
    }

    pub fn num_cities(&self) -> usize {
        self.num_cities
    }

    #[inline(always)]
    fn index(&self, from: CityIdx, to: CityIdx) -> usize {
        from.get() * self.num_cities + to.get()
    }

    #[inline(always)]
    pub fn weight(&self, from: CityIdx, to: CityIdx) -> Distance {
        self.distances[self.index(from, to)]
    }

    /// Whether a direct connection exists. Zero weights and self-loops are not edges.
    #[inline(always)]
    pub fn has_edge(&self, from: CityIdx, to: CityIdx) -> bool {
        from != to && self.weight(from, to) > 0.0
    }

    /// Deletes the undirected edge between `u` and `v` in both directions.
    pub fn remove_edge(&mut self, u: CityIdx, v: CityIdx) {
        let forward = self.index(u, v);
        let backward = self.index(v, u);
        self.distances[forward] = 0.0;
        self.distances[backward] = 0.0;
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.num_cities).all(|i| {
            (0..self.num_cities).all(|j| {
                self.distances[i * self.num_cities + j] == self.distances[j * self.num_cities + i]
            })
        })
    }

    pub fn rows(&self) -> Vec<Vec<Distance>> {
        if self.num_cities == 0 {
            return Vec::new();
        }

        self.distances
            .chunks(self.num_cities)
            .map(|row| row.to_vec())
            .collect()
    }
}

impl TryFrom<Vec<Vec<Distance>>> for DistanceMatrix {
    type Error = RoutingError;

    fn try_from(rows: Vec<Vec<Distance>>) -> Result<Self, Self::Error> {
        DistanceMatrix::new(rows)
    }
}

impl From<DistanceMatrix> for Vec<Vec<Distance>> {
    fn from(matrix: DistanceMatrix) -> Self {
        matrix.rows()
    }
}

impl Default for DistanceMatrix {
    fn default() -> Self {
        default_railway_matrix()
    }
}

pub fn default_railway_matrix() -> DistanceMatrix {
    let num_cities = DEFAULT_RAILWAY_MATRIX.len();
    DistanceMatrix {
        distances: DEFAULT_RAILWAY_MATRIX.iter().flatten().copied().collect(),
        num_cities,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matrix_is_symmetric() {
        let matrix = default_railway_matrix();
        assert_eq!(matrix.num_cities(), 8);
        assert!(matrix.is_symmetric());
        assert_eq!(matrix.weight(CityIdx::new(0), CityIdx::new(3)), 1153.0);
        assert_eq!(matrix.weight(CityIdx::new(5), CityIdx::new(6)), 624.0);
    }

    #[test]
    fn test_new_rejects_non_square() {
        let result = DistanceMatrix::new(vec![vec![0.0, 1.0], vec![1.0]]);
        assert_eq!(result, Err(RoutingError::InvalidDimensions { expected: 2 }));
    }

    #[test]
    fn test_with_size_rejects_wrong_count() {
        let result = DistanceMatrix::with_size(3, vec![vec![0.0, 1.0], vec![1.0, 0.0]]);
        assert_eq!(result, Err(RoutingError::InvalidDimensions { expected: 3 }));
    }

    #[test]
    fn test_new_rejects_negative_and_non_finite() {
        let negative = DistanceMatrix::new(vec![vec![0.0, -4.0], vec![4.0, 0.0]]);
        assert!(matches!(
            negative,
            Err(RoutingError::NegativeWeight {
                row: 0,
                column: 1,
                ..
            })
        ));

        let infinite = DistanceMatrix::new(vec![vec![0.0, 4.0], vec![f64::INFINITY, 0.0]]);
        assert!(matches!(
            infinite,
            Err(RoutingError::NonFiniteWeight {
                row: 1,
                column: 0,
                ..
            })
        ));
    }

    #[test]
    fn test_has_edge_ignores_zero_and_diagonal() {
        let matrix =
            DistanceMatrix::new(vec![vec![5.0, 0.0, 2.0], vec![0.0, 0.0, 3.0], vec![2.0, 3.0, 0.0]])
                .unwrap();

        assert!(!matrix.has_edge(CityIdx::new(0), CityIdx::new(0)));
        assert!(!matrix.has_edge(CityIdx::new(0), CityIdx::new(1)));
        assert!(matrix.has_edge(CityIdx::new(0), CityIdx::new(2)));
    }

    #[test]
    fn test_remove_edge_zeroes_both_directions() {
        let mut matrix = default_railway_matrix();
        matrix.remove_edge(CityIdx::new(3), CityIdx::new(6));

        assert_eq!(matrix.weight(CityIdx::new(3), CityIdx::new(6)), 0.0);
        assert_eq!(matrix.weight(CityIdx::new(6), CityIdx::new(3)), 0.0);
        assert_eq!(matrix.weight(CityIdx::new(3), CityIdx::new(5)), 281.0);
    }

    #[test]
    fn test_asymmetric_matrix_is_accepted() {
        let matrix = DistanceMatrix::new(vec![vec![0.0, 1.0], vec![2.0, 0.0]]).unwrap();
        assert!(!matrix.is_symmetric());
    }

    #[test]
    fn test_serde_uses_nested_rows() {
        let matrix = DistanceMatrix::new(vec![vec![0.0, 7.0], vec![7.0, 0.0]]).unwrap();
        let json = serde_json::to_string(&matrix).unwrap();
        assert_eq!(json, "[[0.0,7.0],[7.0,0.0]]");

        let invalid: Result<DistanceMatrix, _> = serde_json::from_str("[[0.0,-1.0],[1.0,0.0]]");
        assert!(invalid.is_err());
    }
}
