use clap::Args;
use routewise_optimizer::problem::fleet_utilization::FleetUtilization;
use serde::Serialize;

use crate::{
    common::{DataArgs, print_json},
    tables::new_table,
};

#[derive(Args)]
pub struct FleetArgs {
    #[command(flatten)]
    data: DataArgs,

    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct FleetOverview {
    utilization: FleetUtilization,
    locations: Vec<String>,
}

pub fn run(args: FleetArgs) -> anyhow::Result<()> {
    let network = args.data.load_network()?;
    let overview = FleetOverview {
        utilization: network.fleet_utilization(),
        locations: network.locations(),
    };

    if args.json {
        return print_json(&overview);
    }

    let utilization = &overview.utilization;
    let mut table = new_table(["Vehicles", "Available", "In transit", "Maintenance", "Utilization", "Availability"]);
    table.add_row([
        utilization.total_vehicles.to_string(),
        utilization.available.to_string(),
        utilization.in_transit.to_string(),
        utilization.maintenance.to_string(),
        format!("{:.1}%", utilization.utilization_rate),
        format!("{:.1}%", utilization.availability_rate),
    ]);
    println!("{table}");
    println!("Locations: {}", overview.locations.join(", "));

    Ok(())
}
