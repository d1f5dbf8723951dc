use std::path::PathBuf;

use clap::Subcommand;
use railway_booking::booking::{Booking, BookingRequest};
use railway_routing::routing::route_option::RouteOption;
use schemars::schema_for;
use serde_json::json;

#[derive(Subcommand)]
pub enum GenerateSubcommands {
    JsonSchema {
        /// Output file for the schema document
        #[arg(long, short = 'o')]
        out: PathBuf,
    },
}

pub fn run(subcommand: GenerateSubcommands) -> Result<(), anyhow::Error> {
    match subcommand {
        GenerateSubcommands::JsonSchema { out } => {
            let schema = generate_json_schema()?;

            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)?;
            }

            std::fs::write(out, schema)?;
        }
    }

    Ok(())
}

fn generate_json_schema() -> Result<String, serde_json::Error> {
    let document = json!({
        "RouteOption": schema_for!(RouteOption),
        "BookingRequest": schema_for!(BookingRequest),
        "Booking": schema_for!(Booking),
    });

    serde_json::to_string_pretty(&document)
}
