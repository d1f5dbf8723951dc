use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RoutingError {
    #[error("Matrix must be {expected}x{expected}")]
    InvalidDimensions { expected: usize },

    #[error("Matrix values must be non-negative numbers (found {value} at [{row}][{column}])")]
    NegativeWeight { row: usize, column: usize, value: f64 },

    #[error("Matrix values must be finite numbers (found {value} at [{row}][{column}])")]
    NonFiniteWeight { row: usize, column: usize, value: f64 },

    #[error("Network has {cities} cities but the matrix is {matrix}x{matrix}")]
    CityCountMismatch { cities: usize, matrix: usize },

    #[error("Unknown city: {0}")]
    UnknownCity(String),

    #[error("Source and destination cannot be the same")]
    SameEndpoints,
}
