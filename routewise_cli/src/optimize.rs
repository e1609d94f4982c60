use clap::Args;
use routewise_optimizer::{
    cost::cost_comparison::compare_costs,
    emissions::{emission_comparison::compare_emissions, green_alternatives::green_alternatives},
    problem::priority::Priority,
    solver::{
        objective::Objective,
        optimizer::RouteOptimizer,
        outcome::{OptimizationOutcome, OptimizationResult},
        request::{DEFAULT_TOP_N, OptimizationRequest},
    },
};
use tracing::{info, warn};

use crate::{
    common::{DataArgs, ParamsArgs, print_json},
    tables::{new_table, ranked_options_table},
};

#[derive(Args)]
pub struct OptimizeArgs {
    #[command(flatten)]
    data: DataArgs,

    #[command(flatten)]
    params: ParamsArgs,

    #[arg(long)]
    origin: String,

    #[arg(long)]
    destination: String,

    /// Order weight in kg
    #[arg(short, long)]
    weight: f64,

    /// Express, Standard or Economy
    #[arg(short, long, default_value_t = Priority::Standard)]
    priority: Priority,

    /// Options kept per objective
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_N)]
    top_n: usize,

    /// Print the raw outcome as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: OptimizeArgs) -> anyhow::Result<()> {
    let network = args.data.load_network()?;
    let optimizer = RouteOptimizer::new(network, args.params.load_params()?);

    let request = OptimizationRequest::new(args.origin, args.destination, args.weight)
        .with_priority(args.priority)
        .with_top_n(args.top_n);

    let validation = request.validate(optimizer.network());
    for issue in &validation.errors {
        warn!(%issue, "Request check failed");
    }
    for issue in &validation.warnings {
        info!(%issue, "Request warning");
    }

    let outcome = optimizer.optimize_route(&request);

    if args.json {
        return print_json(&outcome);
    }

    match &outcome {
        OptimizationOutcome::Success(result) => print_result(&optimizer, &request, result)?,
        OptimizationOutcome::Failure(failure) => {
            println!("{}", failure.message);
            println!(
                "Recommendation: {} ({})",
                failure.recommendations.primary.option.as_str(),
                failure.recommendations.primary.rationale
            );
        }
    }

    Ok(())
}

fn print_result(
    optimizer: &RouteOptimizer,
    request: &OptimizationRequest,
    result: &OptimizationResult,
) -> anyhow::Result<()> {
    println!(
        "{} combinations evaluated for {} -> {} ({} kg, {})",
        result.total_combinations_evaluated,
        request.origin,
        request.destination,
        request.order_weight_kg,
        request.priority
    );

    for objective in Objective::ALL {
        println!(
            "{}",
            ranked_options_table(objective, result.ranked_options.get(objective))
        );
    }

    let recommendations = &result.recommendations;
    println!(
        "Recommended: {} - {}",
        recommendations.primary.option.as_str(),
        recommendations.primary.rationale
    );
    if let Some(alternative) = &recommendations.alternative {
        println!(
            "Alternative: {} - {}",
            alternative.option.as_str(),
            alternative.rationale
        );
    }

    println!("{}", result.trade_off_analysis.fastest_vs_cheapest.message);
    println!("{}", result.trade_off_analysis.cheapest_vs_greenest.message);

    for gap in &result.configuration_gaps {
        warn!(%gap, "Priced with fallback rates");
    }

    let (Some(cheapest), Some(greenest)) = (
        result.ranked_options.best(Objective::Cheapest),
        result.ranked_options.best(Objective::Greenest),
    ) else {
        return Ok(());
    };

    let cheapest_analysis = optimizer.analyze_option(cheapest, request.order_weight_kg)?;
    let greenest_analysis = optimizer.analyze_option(greenest, request.order_weight_kg)?;
    let currency = &optimizer.params().cost_rates.currency;

    let mut table = new_table(["Pick", "Vehicle", "Cost", "Per km", "CO₂ (kg)", "Offset", "Rating"]);
    for (label, analysis) in [("cheapest", &cheapest_analysis), ("greenest", &greenest_analysis)] {
        table.add_row([
            label.to_owned(),
            analysis.vehicle_id.clone(),
            format!("{currency} {:.2}", analysis.cost.total_cost),
            analysis
                .cost_per_km
                .map_or_else(|| String::from("-"), |per_km| format!("{per_km:.2}")),
            format!("{:.2}", analysis.emissions.total_emissions_kg),
            format!("{currency} {:.2}", analysis.carbon_offset.offset_cost_local),
            analysis.efficiency.to_string(),
        ]);
    }
    println!("{table}");

    let costs = compare_costs(&greenest_analysis.cost, &cheapest_analysis.cost);
    println!(
        "Greenest costs {currency} {:.2} more than cheapest ({:.1}%), mostly {:?}",
        costs.cost_difference, costs.percentage_difference, costs.biggest_cost_driver
    );

    let emissions = compare_emissions(
        greenest_analysis.emissions.total_emissions_kg,
        cheapest_analysis.emissions.total_emissions_kg,
        &optimizer.params().emission_factors,
    );
    println!("{}", emissions.interpretation);

    let alternatives = green_alternatives(
        cheapest.distance_km,
        cheapest.emissions_score,
        optimizer
            .network()
            .vehicles()
            .iter()
            .filter(|vehicle| {
                vehicle.status().is_assignable() && vehicle.can_carry(request.order_weight_kg)
            }),
    );
    if !alternatives.is_empty() {
        let mut table = new_table(["Greener vehicle", "Type", "CO₂ (kg)", "Saved (kg)", "Saved (%)"]);
        for alternative in alternatives.iter().take(DEFAULT_TOP_N) {
            table.add_row([
                alternative.vehicle_id.clone(),
                alternative.vehicle_type.to_string(),
                format!("{:.2}", alternative.emissions_kg),
                format!("{:.2}", alternative.emission_savings_kg),
                format!("{:.1}", alternative.emission_savings_pct),
            ]);
        }
        println!("{table}");
    }

    Ok(())
}
