use railway_booking::{booking::BookingService, payment::PaymentSimulator, timetable::Timetable};
use railway_routing::network_store::NetworkStore;

use crate::{admin::password_store::PasswordStore, config::Config};

pub struct AppState {
    pub network: NetworkStore,
    pub credentials: PasswordStore,
    pub bookings: BookingService,
}

impl AppState {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let network = config.load_network()?;
        let credentials = PasswordStore::load(&config.password_file)?;

        Ok(AppState {
            network: NetworkStore::new(network),
            credentials,
            bookings: BookingService::new(
                Timetable::default(),
                PaymentSimulator::new(config.payment_delay),
            ),
        })
    }
}
