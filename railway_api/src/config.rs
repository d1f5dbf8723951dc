use std::{net::SocketAddr, path::PathBuf, time::Duration};

use anyhow::Context;
use railway_routing::{city::Cities, matrix_file::read_network_file, network::RailwayNetwork};

const BIND_ADDR_ENV_VAR: &str = "RAILWAY_BIND_ADDR";
const PASSWORD_FILE_ENV_VAR: &str = "RAILWAY_PASSWORD_FILE";
const PAYMENT_DELAY_ENV_VAR: &str = "RAILWAY_PAYMENT_DELAY_MS";
const MATRIX_FILE_ENV_VAR: &str = "RAILWAY_MATRIX_FILE";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_PASSWORD_FILE: &str = "./data/admin_password.json";
const DEFAULT_PAYMENT_DELAY_MS: u64 = 3000;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub password_file: PathBuf,
    pub payment_delay: Duration,
    /// JSON file `{ "matrix": [[...]] }` replacing the default distances at startup.
    pub matrix_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let bind_addr = lookup(BIND_ADDR_ENV_VAR)
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .with_context(|| format!("{BIND_ADDR_ENV_VAR} is not a valid socket address"))?;

        let password_file = PathBuf::from(
            lookup(PASSWORD_FILE_ENV_VAR).unwrap_or_else(|| DEFAULT_PASSWORD_FILE.to_string()),
        );

        let payment_delay_ms = match lookup(PAYMENT_DELAY_ENV_VAR) {
            Some(value) => value
                .parse::<u64>()
                .with_context(|| format!("{PAYMENT_DELAY_ENV_VAR} must be a number of milliseconds"))?,
            None => DEFAULT_PAYMENT_DELAY_MS,
        };

        Ok(Config {
            bind_addr,
            password_file,
            payment_delay: Duration::from_millis(payment_delay_ms),
            matrix_file: lookup(MATRIX_FILE_ENV_VAR).map(PathBuf::from),
        })
    }

    pub fn load_network(&self) -> anyhow::Result<RailwayNetwork> {
        let Some(path) = &self.matrix_file else {
            return Ok(RailwayNetwork::default());
        };

        read_network_file(path, Cities::default())
            .with_context(|| format!("Invalid matrix file {}", path.display()))
    }
}
