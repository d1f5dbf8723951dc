use std::collections::HashMap;

use jiff::Timestamp;
use parking_lot::RwLock;
use railway_routing::{network::RailwayNetwork, routing::route_option::RouteOption};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::{
    error::BookingError,
    passenger::Passenger,
    payment::{PaymentReceipt, PaymentSimulator},
    timetable::{Timetable, Train},
};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct BookingRequest {
    pub passenger: Passenger,
    /// City names of the chosen route, as returned by the route search.
    pub route: Vec<String>,
    pub train_id: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Booking {
    pub id: Uuid,
    pub passenger: Passenger,
    pub train: Train,
    pub route: RouteOption,
    pub payment: PaymentReceipt,
    #[schemars(with = "String")]
    pub booked_at: Timestamp,
}

/// Confirmed bookings, kept for the lifetime of the process.
#[derive(Default)]
pub struct BookingLedger {
    bookings: RwLock<HashMap<Uuid, Booking>>,
}

impl BookingLedger {
    pub fn insert(&self, booking: Booking) {
        self.bookings.write().insert(booking.id, booking);
    }

    pub fn get(&self, id: &Uuid) -> Option<Booking> {
        self.bookings.read().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.bookings.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.read().is_empty()
    }
}

pub struct BookingService {
    timetable: Timetable,
    payments: PaymentSimulator,
    ledger: BookingLedger,
}

impl BookingService {
    pub fn new(timetable: Timetable, payments: PaymentSimulator) -> Self {
        BookingService {
            timetable,
            payments,
            ledger: BookingLedger::default(),
        }
    }

    pub fn timetable(&self) -> &Timetable {
        &self.timetable
    }

    pub fn ledger(&self) -> &BookingLedger {
        &self.ledger
    }

    /// Books a ticket on one of the routes currently offered by `network`.
    ///
    /// Distance and price come from the route recomputed on `network`, never from
    /// the request.
    pub async fn book(
        &self,
        network: &RailwayNetwork,
        request: BookingRequest,
    ) -> Result<Booking, BookingError> {
        request.passenger.validate()?;

        let route = offered_route(network, &request.route)?;
        let (from, to) = (&route.path[0], &route.path[route.path.len() - 1]);

        let train = self
            .timetable
            .find(request.train_id, from, to)
            .ok_or_else(|| BookingError::UnknownTrain {
                train_id: request.train_id,
                from: from.clone(),
                to: to.clone(),
            })?;

        let payment = self.payments.charge(route.price).await?;

        let booking = Booking {
            id: Uuid::new_v4(),
            passenger: request.passenger,
            train,
            route,
            payment,
            booked_at: Timestamp::now(),
        };

        info!(
            id = %booking.id,
            train = %booking.train.name,
            price = booking.route.price,
            "booking confirmed"
        );

        self.ledger.insert(booking.clone());
        Ok(booking)
    }
}

fn offered_route(network: &RailwayNetwork, path: &[String]) -> Result<RouteOption, BookingError> {
    let [from, .., to] = path else {
        return Err(BookingError::UnknownRoute(format!("{path:?}")));
    };

    network
        .find_routes(from, to)?
        .into_iter()
        .find(|route| route.path == path)
        .ok_or_else(|| BookingError::UnknownRoute(path.join(" -> ")))
}
