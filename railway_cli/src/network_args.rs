use std::path::PathBuf;

use clap::Args;
use railway_routing::{city::Cities, matrix_file::read_network_file, network::RailwayNetwork};
use tracing::debug;

#[derive(Args)]
pub struct NetworkArgs {
    /// JSON file `{ "matrix": [[...]] }` to use instead of the default network
    #[arg(short, long)]
    matrix: Option<PathBuf>,
}

impl NetworkArgs {
    pub fn load(&self) -> anyhow::Result<RailwayNetwork> {
        match &self.matrix {
            Some(path) => {
                debug!("loading matrix from {}", path.display());
                Ok(read_network_file(path, Cities::default())?)
            }
            None => Ok(RailwayNetwork::default()),
        }
    }
}
