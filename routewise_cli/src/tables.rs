use comfy_table::{Table, presets::UTF8_FULL};
use routewise_optimizer::{
    cost::cost_breakdown::CostBreakdown,
    emissions::emission_breakdown::EmissionBreakdown,
    parsers::data_quality::DataQualityReport,
    solver::{objective::Objective, ranking::RankedOption},
};

pub fn new_table<const N: usize>(header: [&str; N]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(header);
    table
}

pub fn ranked_options_table(objective: Objective, options: &[RankedOption]) -> Table {
    let mut table = new_table([
        "#",
        "Order",
        "Route",
        "Vehicle",
        "Type",
        "Time (h)",
        "Cost",
        "CO₂ (kg)",
        "Composite",
    ]);

    for (rank, option) in options.iter().enumerate() {
        table.add_row([
            format!("{} {}", objective, rank + 1),
            option.order_id.clone(),
            option.route.clone(),
            option.vehicle_id.clone(),
            option.vehicle_type.to_string(),
            format!("{:.1}", option.time_score),
            format!("{:.2}", option.cost_score),
            format!("{:.2}", option.emissions_score),
            format!("{:.3}", option.composite_score),
        ]);
    }

    table
}

pub fn cost_table(breakdown: &CostBreakdown, currency: &str) -> Table {
    let mut table = new_table(["Component", currency]);

    let rows = [
        ("Fuel", breakdown.fuel_cost),
        ("Labor", breakdown.labor_cost),
        ("Maintenance", breakdown.maintenance_cost),
        ("Tolls", breakdown.toll_charges),
        ("Insurance", breakdown.insurance_cost),
        ("Packaging", breakdown.packaging_cost),
        ("Subtotal", breakdown.subtotal),
        ("Platform fee", breakdown.platform_fee),
        ("Overhead", breakdown.overhead),
        ("Total", breakdown.total_cost),
    ];
    for (label, amount) in rows {
        table.add_row([label.to_owned(), format!("{amount:.2}")]);
    }

    table
}

pub fn emissions_table(breakdown: &EmissionBreakdown) -> Table {
    let mut table = new_table(["Measure", "Value"]);

    table
        .add_row(["Direct (kg)".to_owned(), format!("{:.2}", breakdown.direct_emissions_kg)])
        .add_row([
            "Fuel based (kg)".to_owned(),
            format!("{:.2}", breakdown.fuel_based_emissions_kg),
        ])
        .add_row(["Total (kg)".to_owned(), format!("{:.2}", breakdown.total_emissions_kg)])
        .add_row(["Per km (kg)".to_owned(), format!("{:.4}", breakdown.emissions_per_km)])
        .add_row([
            "Fuel consumed (l)".to_owned(),
            format!("{:.2}", breakdown.fuel_consumed_liters),
        ]);

    table
}

pub fn data_quality_table(report: &DataQualityReport) -> Table {
    let mut table = new_table([
        "Dataset",
        "Rows",
        "Columns",
        "Missing %",
        "Duplicates",
        "Columns w/ missing",
    ]);

    for quality in &report.datasets {
        let columns_with_missing = if quality.columns_with_missing.is_empty() {
            String::from("None")
        } else {
            quality.columns_with_missing.join(", ")
        };
        table.add_row([
            quality.dataset.clone(),
            quality.total_rows.to_string(),
            quality.total_columns.to_string(),
            format!("{:.2}", quality.missing_percentage),
            quality.duplicate_rows.to_string(),
            columns_with_missing,
        ]);
    }

    table
}
