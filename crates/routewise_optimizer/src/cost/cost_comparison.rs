use schemars::JsonSchema;
use serde::Serialize;

use crate::utils::round::round2;

use super::cost_breakdown::CostBreakdown;

/// Which side of a pairwise comparison comes out ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub enum ComparedOption {
    A,
    B,
}

impl ComparedOption {
    /// The side with the lower value, `None` on a tie.
    pub fn lower_of(difference_a_minus_b: f64) -> Option<ComparedOption> {
        if difference_a_minus_b > 0.0 {
            Some(ComparedOption::B)
        } else if difference_a_minus_b < 0.0 {
            Some(ComparedOption::A)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CostComponent {
    FuelCost,
    LaborCost,
    MaintenanceCost,
    TollCharges,
}

impl CostComponent {
    pub const DRIVERS: [CostComponent; 4] = [
        CostComponent::FuelCost,
        CostComponent::LaborCost,
        CostComponent::MaintenanceCost,
        CostComponent::TollCharges,
    ];

    pub fn of(&self, breakdown: &CostBreakdown) -> f64 {
        match self {
            CostComponent::FuelCost => breakdown.fuel_cost,
            CostComponent::LaborCost => breakdown.labor_cost,
            CostComponent::MaintenanceCost => breakdown.maintenance_cost,
            CostComponent::TollCharges => breakdown.toll_charges,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct CostComparison {
    /// `a.total_cost - b.total_cost`
    pub cost_difference: f64,
    /// Difference relative to `b`, in percent. Zero when `b` costs nothing.
    pub percentage_difference: f64,
    pub cheaper_option: Option<ComparedOption>,
    pub biggest_cost_driver: CostComponent,
    pub driver_difference: f64,
}

pub fn compare_costs(a: &CostBreakdown, b: &CostBreakdown) -> CostComparison {
    let difference = a.total_cost - b.total_cost;
    let percentage_difference = if b.total_cost > 0.0 {
        difference / b.total_cost * 100.0
    } else {
        0.0
    };

    // First component wins on equal deltas.
    let (biggest_cost_driver, driver_difference) = CostComponent::DRIVERS
        .iter()
        .map(|component| (*component, component.of(a) - component.of(b)))
        .fold(None, |best: Option<(CostComponent, f64)>, candidate| match best {
            Some(best) if best.1.abs() >= candidate.1.abs() => Some(best),
            _ => Some(candidate),
        })
        .unwrap_or((CostComponent::FuelCost, 0.0));

    CostComparison {
        cost_difference: round2(difference),
        percentage_difference: round2(percentage_difference),
        cheaper_option: ComparedOption::lower_of(difference),
        biggest_cost_driver,
        driver_difference: round2(driver_difference),
    }
}
