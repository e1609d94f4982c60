use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{cost::cost_rates::CostRates, emissions::emission_factors::EmissionFactors};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Threads {
    Single,
    #[default]
    Auto,
    Multi(usize),
}

impl Threads {
    pub fn number_of_threads(&self) -> usize {
        match self {
            Threads::Single => 1,
            Threads::Multi(num) => (*num).max(1),
            Threads::Auto => std::thread::available_parallelism().map_or(1, |n| n.get()),
        }
    }
}

/// Configuration shared read-only by every optimize call.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OptimizerParams {
    pub cost_rates: CostRates,
    pub emission_factors: EmissionFactors,
    /// Worker threads used by batch optimization.
    pub batch_threads: Threads,
}
