pub mod carbon_offset;
pub mod emission_breakdown;
pub mod emission_comparison;
pub mod emission_factors;
pub mod green_alternatives;
pub mod sustainability_report;
pub mod vehicle_efficiency;
