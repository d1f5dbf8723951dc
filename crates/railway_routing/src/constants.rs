/// Effective average speed used to derive travel time from distance.
pub const AVERAGE_SPEED_KMH: f64 = 60.0;

/// Flat fee added to the distance when pricing a ticket.
pub const BASE_FARE: f64 = 100.0;

/// Upper bound on the number of options returned for a single query.
pub const MAX_ROUTE_OPTIONS: usize = 3;

pub const DEFAULT_CITIES: [&str; 8] = [
    "Mumbai",
    "Chennai",
    "Bangalore",
    "Delhi",
    "Hyderabad",
    "Jaipur",
    "Shimla",
    "Ahmedabad",
];

/// Distances in km between [`DEFAULT_CITIES`], row-major.
pub const DEFAULT_RAILWAY_MATRIX: [[f64; 8]; 8] = [
    [0.0, 1338.0, 981.0, 1153.0, 711.0, 947.0, 1425.0, 524.0],
    [1338.0, 0.0, 346.0, 2180.0, 625.0, 1862.0, 2458.0, 1862.0],
    [981.0, 346.0, 0.0, 2111.0, 575.0, 1793.0, 2389.0, 1793.0],
    [1153.0, 2180.0, 2111.0, 0.0, 1273.0, 281.0, 343.0, 934.0],
    [711.0, 625.0, 575.0, 1273.0, 0.0, 1054.0, 1630.0, 1054.0],
    [947.0, 1862.0, 1793.0, 281.0, 1054.0, 0.0, 624.0, 655.0],
    [1425.0, 2458.0, 2389.0, 343.0, 1630.0, 624.0, 0.0, 1279.0],
    [524.0, 1862.0, 1793.0, 934.0, 1054.0, 655.0, 1279.0, 0.0],
];
