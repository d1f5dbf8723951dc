use railway_routing::error::RoutingError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BookingError {
    #[error("Invalid passenger details: {0}")]
    InvalidPassenger(String),

    #[error(transparent)]
    Routing(#[from] RoutingError),

    #[error("Route {0} is not offered")]
    UnknownRoute(String),

    #[error("Train {train_id} does not run from {from} to {to}")]
    UnknownTrain { train_id: u32, from: String, to: String },

    #[error("Payment declined: {0}")]
    PaymentDeclined(String),
}
