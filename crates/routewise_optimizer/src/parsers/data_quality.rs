use csv::StringRecord;
use fxhash::FxHashSet;
use schemars::JsonSchema;
use serde::Serialize;
use tracing::warn;

use crate::utils::round::round2;

/// Completeness figures for one loaded table.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct DatasetQuality {
    pub dataset: String,
    pub total_rows: usize,
    pub total_columns: usize,
    pub missing_cells: usize,
    /// Share of empty cells, in percent, rounded to two decimals.
    pub missing_percentage: f64,
    /// Header names with at least one empty cell, in header order.
    pub columns_with_missing: Vec<String>,
    /// Rows identical to an earlier row.
    pub duplicate_rows: usize,
}

impl DatasetQuality {
    pub fn has_issues(&self) -> bool {
        self.missing_cells > 0 || self.duplicate_rows > 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, JsonSchema)]
pub struct DataQualityReport {
    pub datasets: Vec<DatasetQuality>,
}

impl DataQualityReport {
    pub fn has_issues(&self) -> bool {
        self.datasets.iter().any(DatasetQuality::has_issues)
    }

    pub fn dataset(&self, name: &str) -> Option<&DatasetQuality> {
        self.datasets.iter().find(|quality| quality.dataset == name)
    }
}

/// Counts empty cells and repeated rows of a table. Cells are expected to be
/// trimmed already, so a blank cell counts as missing.
pub fn assess_table(
    dataset: &str,
    headers: &StringRecord,
    rows: &[StringRecord],
) -> DatasetQuality {
    let total_columns = headers.len();
    let mut missing_per_column = vec![0_usize; total_columns];
    let mut seen: FxHashSet<Vec<&str>> = FxHashSet::default();
    let mut duplicate_rows = 0;

    for row in rows {
        for (index, cell) in row.iter().enumerate() {
            if cell.is_empty() {
                if let Some(missing) = missing_per_column.get_mut(index) {
                    *missing += 1;
                }
            }
        }

        if !seen.insert(row.iter().collect()) {
            duplicate_rows += 1;
        }
    }

    let missing_cells: usize = missing_per_column.iter().sum();
    let total_cells = rows.len() * total_columns;
    let missing_percentage = if total_cells > 0 {
        round2(missing_cells as f64 / total_cells as f64 * 100.0)
    } else {
        0.0
    };
    let columns_with_missing: Vec<String> = headers
        .iter()
        .zip(&missing_per_column)
        .filter(|(_, missing)| **missing > 0)
        .map(|(header, _)| header.to_owned())
        .collect();

    if missing_cells > 0 {
        warn!(
            dataset,
            missing_percentage,
            columns = ?columns_with_missing,
            "Missing data"
        );
    }
    if duplicate_rows > 0 {
        warn!(dataset, duplicate_rows, "Duplicate rows");
    }

    DatasetQuality {
        dataset: dataset.to_owned(),
        total_rows: rows.len(),
        total_columns,
        missing_cells,
        missing_percentage,
        columns_with_missing,
        duplicate_rows,
    }
}
