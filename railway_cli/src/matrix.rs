use clap::Args;
use comfy_table::Table;
use railway_routing::network::RailwayNetwork;

use crate::network_args::NetworkArgs;

#[derive(Args)]
pub struct MatrixArgs {
    #[command(flatten)]
    network: NetworkArgs,
}

pub fn run(args: MatrixArgs) -> anyhow::Result<()> {
    let network = args.network.load()?;
    println!("{}", matrix_table(&network));
    Ok(())
}

fn matrix_table(network: &RailwayNetwork) -> Table {
    let cities = network.cities();
    let mut table = Table::new();

    let mut header = vec![String::new()];
    header.extend(cities.iter().map(|city| city.chars().take(3).collect::<String>()));
    table.set_header(header);

    for (city, row) in cities.iter().zip(network.matrix().rows()) {
        let mut cells = vec![city.to_string()];
        cells.extend(row.iter().map(|distance| distance.to_string()));
        table.add_row(cells);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_table() {
        let table = matrix_table(&RailwayNetwork::default()).to_string();

        assert!(table.contains("Mum"));
        assert!(table.contains("Ahmedabad"));
        assert!(table.contains("1153"));
    }
}
