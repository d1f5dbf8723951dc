use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    constants::{AVERAGE_SPEED_KMH, BASE_FARE},
    distance_matrix::Distance,
};

/// A rider-facing route between two cities with its derived trip attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RouteOption {
    /// City names from origin to destination.
    pub path: Vec<String>,
    /// Total distance in km.
    pub distance: Distance,
    /// Travel time in whole hours, rounded up.
    pub time: f64,
    pub price: f64,
    /// Set on the globally shortest route only.
    #[serde(rename = "best")]
    pub is_best: bool,
}

impl RouteOption {
    pub fn new(path: Vec<String>, distance: Distance, is_best: bool) -> Self {
        RouteOption {
            path,
            distance,
            time: travel_time_hours(distance),
            price: ticket_price(distance),
            is_best,
        }
    }

    pub fn origin(&self) -> Option<&str> {
        self.path.first().map(String::as_str)
    }

    pub fn destination(&self) -> Option<&str> {
        self.path.last().map(String::as_str)
    }
}

pub fn travel_time_hours(distance: Distance) -> f64 {
    (distance / AVERAGE_SPEED_KMH).ceil()
}

pub fn ticket_price(distance: Distance) -> f64 {
    distance + BASE_FARE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_fields() {
        let option = RouteOption::new(
            vec![String::from("Mumbai"), String::from("Delhi")],
            1153.0,
            true,
        );

        assert_eq!(option.time, 20.0);
        assert_eq!(option.price, 1253.0);
        assert_eq!(option.origin(), Some("Mumbai"));
        assert_eq!(option.destination(), Some("Delhi"));
    }

    #[test]
    fn test_time_rounds_up() {
        assert_eq!(travel_time_hours(60.0), 1.0);
        assert_eq!(travel_time_hours(61.0), 2.0);
        assert_eq!(travel_time_hours(2241.0), 38.0);
    }

    #[test]
    fn test_serializes_best_flag() {
        let option = RouteOption::new(
            vec![String::from("Jaipur"), String::from("Shimla")],
            624.0,
            false,
        );

        let value = serde_json::to_value(&option).unwrap();
        assert_eq!(value["best"], serde_json::Value::Bool(false));
        assert_eq!(value["price"], serde_json::json!(724.0));
        assert!(value.get("is_best").is_none());
    }
}
