use schemars::JsonSchema;
use serde::Serialize;

use crate::utils::round::round2;

use super::{objective::Objective, ranking::RankedOptions};

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct FastestVsCheapest {
    /// Cheapest option's time minus the fastest option's time.
    pub time_saved_h: f64,
    /// Fastest option's cost minus the cheapest option's cost.
    pub extra_cost: f64,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct CheapestVsGreenest {
    /// Greenest option's cost minus the cheapest option's cost.
    pub extra_cost: f64,
    /// Cheapest option's emissions minus the greenest option's emissions.
    pub co2_saved_kg: f64,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct TradeOffAnalysis {
    pub fastest_vs_cheapest: FastestVsCheapest,
    pub cheapest_vs_greenest: CheapestVsGreenest,
}

/// Compares the top pick of each base objective. `None` when nothing was ranked.
pub fn analyze_trade_offs(ranked: &RankedOptions, currency: &str) -> Option<TradeOffAnalysis> {
    let fastest = ranked.best(Objective::Fastest)?;
    let cheapest = ranked.best(Objective::Cheapest)?;
    let greenest = ranked.best(Objective::Greenest)?;

    let time_saved_h = cheapest.time_score - fastest.time_score;
    let fastest_extra_cost = fastest.cost_score - cheapest.cost_score;

    let greenest_extra_cost = greenest.cost_score - cheapest.cost_score;
    let co2_saved_kg = cheapest.emissions_score - greenest.emissions_score;

    Some(TradeOffAnalysis {
        fastest_vs_cheapest: FastestVsCheapest {
            time_saved_h: round2(time_saved_h),
            extra_cost: round2(fastest_extra_cost),
            message: format!(
                "Fastest route saves {:.1} hours but costs {currency} {:.0} more",
                time_saved_h.abs(),
                fastest_extra_cost.abs()
            ),
        },
        cheapest_vs_greenest: CheapestVsGreenest {
            extra_cost: round2(greenest_extra_cost),
            co2_saved_kg: round2(co2_saved_kg),
            message: format!(
                "Greenest route reduces CO₂ by {:.1} kg but costs {currency} {:.0} more",
                co2_saved_kg.abs(),
                greenest_extra_cost.abs()
            ),
        },
    })
}
