use clap::Args;
use comfy_table::Table;
use railway_routing::routing::route_option::RouteOption;
use tracing::info;

use crate::network_args::NetworkArgs;

#[derive(Args)]
pub struct RouteArgs {
    /// Departure city
    source: String,

    /// Arrival city
    destination: String,

    #[command(flatten)]
    network: NetworkArgs,
}

pub fn run(args: RouteArgs) -> anyhow::Result<()> {
    let network = args.network.load()?;
    let routes = network.find_routes(&args.source, &args.destination)?;

    if routes.is_empty() {
        info!("No routes found");
        return Ok(());
    }

    println!("{}", routes_table(&routes));

    Ok(())
}

fn routes_table(routes: &[RouteOption]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["", "Route", "Distance (km)", "Time (h)", "Price"]);

    for route in routes {
        let flag = if route.is_best { "best" } else { "" };
        table.add_row(vec![
            flag.to_string(),
            route.path.join(" -> "),
            route.distance.to_string(),
            route.time.to_string(),
            route.price.to_string(),
        ]);
    }

    table
}
