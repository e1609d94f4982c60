use schemars::JsonSchema;
use serde::Serialize;

use crate::utils::round::{round2, round_to};

use super::{carbon_offset::CarbonOffset, emission_factors::EmissionFactors};

const TOP_EMITTERS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct EmissionRecord {
    pub order_id: String,
    pub route: String,
    pub distance_km: f64,
    pub emissions_kg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct SustainabilityReport {
    pub total_emissions_kg: f64,
    pub total_emissions_tons: f64,
    pub average_emissions_per_record_kg: f64,
    pub average_emissions_per_km: f64,
    pub top_emitters: Vec<EmissionRecord>,
    pub carbon_offset: CarbonOffset,
}

impl SustainabilityReport {
    /// Fleet-wide emission totals. Returns `None` for an empty record set.
    pub fn from_records(
        records: &[EmissionRecord],
        factors: &EmissionFactors,
    ) -> Option<SustainabilityReport> {
        if records.is_empty() {
            return None;
        }

        let count = records.len() as f64;
        let total_emissions_kg: f64 = records.iter().map(|record| record.emissions_kg).sum();

        let per_km: Vec<f64> = records
            .iter()
            .filter(|record| record.distance_km > 0.0)
            .map(|record| record.emissions_kg / record.distance_km)
            .collect();
        let average_emissions_per_km = if per_km.is_empty() {
            0.0
        } else {
            per_km.iter().sum::<f64>() / per_km.len() as f64
        };

        let mut top_emitters = records.to_vec();
        top_emitters.sort_by(|a, b| b.emissions_kg.total_cmp(&a.emissions_kg));
        top_emitters.truncate(TOP_EMITTERS);

        Some(SustainabilityReport {
            total_emissions_kg: round2(total_emissions_kg),
            total_emissions_tons: round2(total_emissions_kg / 1000.0),
            average_emissions_per_record_kg: round2(total_emissions_kg / count),
            average_emissions_per_km: round_to(average_emissions_per_km, 4),
            top_emitters,
            carbon_offset: CarbonOffset::for_emissions(total_emissions_kg, factors),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(order_id: &str, distance_km: f64, emissions_kg: f64) -> EmissionRecord {
        EmissionRecord {
            order_id: order_id.to_owned(),
            route: String::from("Mumbai-Delhi"),
            distance_km,
            emissions_kg,
        }
    }

    #[test]
    fn test_empty_records_have_no_report() {
        assert!(SustainabilityReport::from_records(&[], &EmissionFactors::default()).is_none());
    }

    #[test]
    fn test_report_totals() {
        let records = vec![
            record("ORD1", 100.0, 50.0),
            record("ORD2", 200.0, 150.0),
            record("ORD3", 400.0, 800.0),
        ];

        let report =
            SustainabilityReport::from_records(&records, &EmissionFactors::default()).unwrap();

        assert_eq!(report.total_emissions_kg, 1000.0);
        assert_eq!(report.total_emissions_tons, 1.0);
        assert_eq!(report.average_emissions_per_record_kg, 333.33);
        // (0.5 + 0.75 + 2.0) / 3
        assert_eq!(report.average_emissions_per_km, 1.0833);
        assert_eq!(report.carbon_offset.offset_cost_usd, 15.0);
        assert_eq!(report.top_emitters[0].order_id, "ORD3");
    }

    #[test]
    fn test_top_emitters_are_capped_and_descending() {
        let records: Vec<_> = (1..=8)
            .map(|index| record(&format!("ORD{index}"), 100.0, index as f64 * 10.0))
            .collect();

        let report =
            SustainabilityReport::from_records(&records, &EmissionFactors::default()).unwrap();

        let emitted: Vec<f64> = report
            .top_emitters
            .iter()
            .map(|record| record.emissions_kg)
            .collect();
        assert_eq!(emitted, vec![80.0, 70.0, 60.0, 50.0, 40.0]);
    }
}
