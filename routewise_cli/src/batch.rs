use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use routewise_optimizer::{
    emissions::sustainability_report::{EmissionRecord, SustainabilityReport},
    solver::{
        optimizer::RouteOptimizer, optimizer_params::Threads, outcome::OptimizationOutcome,
        request::OptimizationRequest,
    },
};
use serde::Serialize;
use tracing::info;

use crate::{
    common::{DataArgs, ParamsArgs, print_json},
    tables::new_table,
};

#[derive(Args)]
pub struct BatchArgs {
    #[command(flatten)]
    data: DataArgs,

    #[command(flatten)]
    params: ParamsArgs,

    /// CSV with columns origin, destination, order_weight_kg and optionally
    /// priority and top_n
    #[arg(short, long)]
    requests: PathBuf,

    /// Worker threads, all cores when omitted
    #[arg(short, long)]
    threads: Option<usize>,

    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct BatchSummary<'a> {
    outcomes: &'a [OptimizationOutcome],
    sustainability: Option<SustainabilityReport>,
}

pub fn run(args: BatchArgs) -> anyhow::Result<()> {
    let requests = read_requests(&args.requests)?;
    info!(requests = requests.len(), "Optimizing batch");

    let mut params = args.params.load_params()?;
    if let Some(threads) = args.threads {
        params.batch_threads = Threads::Multi(threads);
    }

    let optimizer = RouteOptimizer::new(args.data.load_network()?, params);
    let outcomes = optimizer.optimize_batch(&requests);

    // one record per order, taken from the recommended option
    let records: Vec<EmissionRecord> = outcomes
        .iter()
        .filter_map(|outcome| outcome.result()?.primary_option())
        .map(EmissionRecord::from)
        .collect();
    let sustainability =
        SustainabilityReport::from_records(&records, &optimizer.params().emission_factors);

    if args.json {
        return print_json(&BatchSummary {
            outcomes: &outcomes,
            sustainability,
        });
    }

    let mut table = new_table(["Origin", "Destination", "Kg", "Outcome", "Vehicle", "Route"]);
    for (request, outcome) in requests.iter().zip(&outcomes) {
        let recommendation = outcome.recommendations().primary.option.as_str().to_owned();
        let primary = outcome.result().and_then(|result| result.primary_option());

        table.add_row([
            request.origin.clone(),
            request.destination.clone(),
            format!("{:.0}", request.order_weight_kg),
            recommendation,
            primary.map_or_else(|| String::from("-"), |option| option.vehicle_id.clone()),
            primary.map_or_else(|| String::from("-"), |option| option.order_id.clone()),
        ]);
    }
    println!("{table}");

    if let Some(report) = sustainability {
        let currency = &optimizer.params().cost_rates.currency;
        println!(
            "Total emissions {:.2} kg ({:.2} t), {:.4} kg/km on average, offset {currency} {:.2}",
            report.total_emissions_kg,
            report.total_emissions_tons,
            report.average_emissions_per_km,
            report.carbon_offset.offset_cost_local
        );
        for record in &report.top_emitters {
            println!(
                "  {} {} {:.2} kg",
                record.order_id, record.route, record.emissions_kg
            );
        }
    }

    Ok(())
}

fn read_requests(path: &Path) -> anyhow::Result<Vec<OptimizationRequest>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("failed to open requests file {}", path.display()))?;

    reader
        .deserialize()
        .enumerate()
        .map(|(index, record)| {
            record.with_context(|| format!("invalid request on line {}", index + 2))
        })
        .collect()
}
