pub mod cost_breakdown;
pub mod cost_comparison;
pub mod cost_rates;
pub mod sensitivity;
