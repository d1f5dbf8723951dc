use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use railway_routing::distance_matrix::{Distance, DistanceMatrix};
use railway_routing::error::RoutingError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::admin::SuccessResponse;
use crate::error::{ApiError, INVALID_MATRIX_VALUES};
use crate::extractors::extract_json;
use crate::state::AppState;

#[derive(Serialize)]
pub struct GraphResponse {
    matrix: Vec<Vec<Distance>>,
}

/// Kept as raw JSON so shape and type errors get the same messages as
/// out-of-range values.
#[derive(Deserialize)]
pub struct GraphUpdateBody {
    #[serde(default)]
    matrix: Option<Value>,
}

pub async fn get_graph_handler(State(state): State<Arc<AppState>>) -> Json<GraphResponse> {
    Json(GraphResponse {
        matrix: state.network.matrix().rows(),
    })
}

pub async fn post_graph_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<GraphUpdateBody>, JsonRejection>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let body = extract_json(body)?;
    let num_cities = state.network.snapshot().cities().len();

    let rows = matrix_rows(body.matrix, num_cities)?;
    let matrix = DistanceMatrix::with_size(num_cities, rows)?;

    state.network.replace(matrix)?;

    Ok(Json(SuccessResponse::new(Some("Graph updated successfully"))))
}

/// Checks the shape first, then that every cell is a number. Range checks are
/// left to [`DistanceMatrix::with_size`].
fn matrix_rows(matrix: Option<Value>, num_cities: usize) -> Result<Vec<Vec<Distance>>, ApiError> {
    let Some(Value::Array(rows)) = matrix else {
        return Err(ApiError::BadRequest(String::from("Invalid matrix format")));
    };

    let square = rows.len() == num_cities
        && rows
            .iter()
            .all(|row| row.as_array().is_some_and(|cells| cells.len() == num_cities));
    if !square {
        return Err(RoutingError::InvalidDimensions {
            expected: num_cities,
        }
        .into());
    }

    rows.iter()
        .map(|row| {
            row.as_array()
                .into_iter()
                .flatten()
                .map(|cell| {
                    cell.as_f64()
                        .ok_or_else(|| ApiError::BadRequest(String::from(INVALID_MATRIX_VALUES)))
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn message(result: Result<Vec<Vec<Distance>>, ApiError>) -> String {
        match result {
            Err(ApiError::BadRequest(message)) => message,
            other => panic!("expected a bad request, got {other:?}"),
        }
    }

    #[test]
    fn test_matrix_rows() {
        let rows = matrix_rows(Some(json!([[0, 2.5], [2.5, 0]])), 2).unwrap();
        assert_eq!(rows, vec![vec![0.0, 2.5], vec![2.5, 0.0]]);
    }

    #[test]
    fn test_matrix_rows_rejects_bad_shapes() {
        assert_eq!(message(matrix_rows(None, 2)), "Invalid matrix format");
        assert_eq!(
            message(matrix_rows(Some(json!("matrix")), 2)),
            "Invalid matrix format"
        );
        assert_eq!(
            message(matrix_rows(Some(json!([[0, 1], 5])), 2)),
            "Matrix must be 2x2"
        );
        assert_eq!(
            message(matrix_rows(Some(json!([[0, 1], [1, 0, 3]])), 2)),
            "Matrix must be 2x2"
        );
    }

    #[test]
    fn test_matrix_rows_rejects_non_numbers() {
        assert_eq!(
            message(matrix_rows(Some(json!([[0, "1"], [1, 0]])), 2)),
            INVALID_MATRIX_VALUES
        );
        assert_eq!(
            message(matrix_rows(Some(json!([[0, null], [1, 0]])), 2)),
            INVALID_MATRIX_VALUES
        );
    }
}
