use clap::Args;
use routewise_optimizer::{
    cost::{
        cost_breakdown::{CostContext, estimate_cost},
        sensitivity::{SensitivityParameter, sensitivity_analysis},
    },
    emissions::{
        carbon_offset::CarbonOffset,
        emission_breakdown::{EmissionBreakdown, estimate_emissions},
        vehicle_efficiency::EfficiencyRating,
    },
    problem::{vehicle_type::VehicleType, weather::WeatherCondition},
};
use serde::Serialize;
use tracing::warn;

use crate::{
    common::{ParamsArgs, print_json},
    tables::{cost_table, emissions_table, new_table},
};

#[derive(Args)]
pub struct TripArgs {
    #[command(flatten)]
    params: ParamsArgs,

    /// Trip distance in km
    #[arg(long)]
    distance: f64,

    /// Express_Bike, Small_Van, Medium_Truck, Large_Truck or Refrigerated
    #[arg(long)]
    vehicle_type: VehicleType,

    /// Fuel efficiency in km per litre
    #[arg(long)]
    fuel_efficiency: f64,

    /// Traffic delay in minutes
    #[arg(long, default_value_t = 0.0)]
    delay: f64,

    /// None, Light_Rain, Heavy_Rain or Fog
    #[arg(long, default_value_t = WeatherCondition::Clear)]
    weather: WeatherCondition,

    /// Order weight in kg
    #[arg(long, default_value_t = 0.0)]
    weight: f64,

    /// Known toll charge, estimated from the distance when omitted
    #[arg(long)]
    toll: Option<f64>,
}

impl TripArgs {
    fn context(&self) -> CostContext<'_> {
        let context = CostContext::new(self.distance, &self.vehicle_type, self.fuel_efficiency)
            .with_traffic_delay(self.delay)
            .with_weather(&self.weather)
            .with_order_weight(self.weight);

        match self.toll {
            Some(toll) => context.with_toll_charge(toll),
            None => context,
        }
    }
}

#[derive(Args)]
pub struct CostArgs {
    #[command(flatten)]
    trip: TripArgs,

    #[arg(long)]
    json: bool,
}

pub fn run_cost(args: CostArgs) -> anyhow::Result<()> {
    let params = args.trip.params.load_params()?;
    let breakdown = estimate_cost(&params.cost_rates, &args.trip.context())?;

    if args.json {
        return print_json(&breakdown);
    }

    for gap in &breakdown.configuration_gaps {
        warn!(%gap, "Priced with fallback rates");
    }
    println!("{}", cost_table(&breakdown, &params.cost_rates.currency));
    if let Some(per_km) = breakdown.cost_per_km(args.trip.distance) {
        println!("{} {per_km:.2} per km", params.cost_rates.currency);
    }

    Ok(())
}

#[derive(Args)]
pub struct SensitivityArgs {
    #[command(flatten)]
    trip: TripArgs,

    /// fuel-price, labor-rate or maintenance-rate
    #[arg(long)]
    parameter: SensitivityParameter,

    /// Variation in percent
    #[arg(long, default_value_t = 20.0)]
    variation: f64,

    #[arg(long)]
    json: bool,
}

pub fn run_sensitivity(args: SensitivityArgs) -> anyhow::Result<()> {
    let params = args.trip.params.load_params()?;
    let analysis = sensitivity_analysis(
        &params.cost_rates,
        &args.trip.context(),
        args.parameter,
        args.variation,
    )?;

    if args.json {
        return print_json(&analysis);
    }

    let currency = &params.cost_rates.currency;
    let mut table = new_table(["Scenario", "Total cost", "Impact"]);
    table
        .add_row([
            String::from("baseline"),
            format!("{currency} {:.2}", analysis.baseline_cost),
            String::from("-"),
        ])
        .add_row([
            format!("{} +{}%", analysis.parameter, analysis.variation_pct),
            format!("{currency} {:.2}", analysis.high_scenario),
            format!("+{:.2}%", analysis.high_impact),
        ])
        .add_row([
            format!("{} -{}%", analysis.parameter, analysis.variation_pct),
            format!("{currency} {:.2}", analysis.low_scenario),
            format!("-{:.2}%", analysis.low_impact),
        ]);
    println!("{table}");

    Ok(())
}

#[derive(Args)]
pub struct EmissionsArgs {
    #[command(flatten)]
    params: ParamsArgs,

    /// Trip distance in km
    #[arg(long)]
    distance: f64,

    /// Vehicle CO₂ rate in kg per km
    #[arg(long)]
    co2_rate: f64,

    /// Fuel efficiency in km per litre
    #[arg(long)]
    fuel_efficiency: f64,

    /// Rate the CO₂ figure against the benchmark band of this vehicle type
    #[arg(long)]
    vehicle_type: Option<VehicleType>,

    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct EmissionsReport {
    emissions: EmissionBreakdown,
    carbon_offset: CarbonOffset,
    #[serde(skip_serializing_if = "Option::is_none")]
    efficiency: Option<EfficiencyRating>,
}

pub fn run_emissions(args: EmissionsArgs) -> anyhow::Result<()> {
    let params = args.params.load_params()?;
    let factors = &params.emission_factors;

    let emissions = estimate_emissions(args.distance, args.co2_rate, args.fuel_efficiency, factors)?;
    let report = EmissionsReport {
        carbon_offset: CarbonOffset::for_emissions(emissions.total_emissions_kg, factors),
        efficiency: args
            .vehicle_type
            .as_ref()
            .map(|vehicle_type| EfficiencyRating::assess(vehicle_type, args.co2_rate, factors)),
        emissions,
    };

    if args.json {
        return print_json(&report);
    }

    println!("{}", emissions_table(&report.emissions));
    println!(
        "Offsetting {:.3} t costs USD {:.2} ({} {:.2})",
        report.carbon_offset.emissions_tons,
        report.carbon_offset.offset_cost_usd,
        params.cost_rates.currency,
        report.carbon_offset.offset_cost_local
    );
    if let Some(efficiency) = report.efficiency {
        println!("Efficiency rating: {efficiency}");
    }

    Ok(())
}
