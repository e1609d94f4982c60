use std::path::{Path, PathBuf};

use csv::StringRecord;
use serde::de::DeserializeOwned;
use tracing::{info, instrument};

use crate::{
    error::NetworkLoadError,
    parsers::{
        data_quality::{DataQualityReport, DatasetQuality, assess_table},
        parser::NetworkParser,
        preprocessing::{RawRoute, RawVehicle, preprocess_routes, preprocess_vehicles},
    },
    problem::logistics_network::LogisticsNetwork,
};

pub const ROUTES_FILE: &str = "routes_distance.csv";
pub const VEHICLES_FILE: &str = "vehicle_fleet.csv";

pub const ROUTE_COLUMNS: [&str; 7] = [
    "Order_ID",
    "Route",
    "Distance_KM",
    "Fuel_Consumption_L",
    "Toll_Charges_INR",
    "Traffic_Delay_Minutes",
    "Weather_Impact",
];

pub const VEHICLE_COLUMNS: [&str; 8] = [
    "Vehicle_ID",
    "Vehicle_Type",
    "Capacity_KG",
    "Fuel_Efficiency_KM_per_L",
    "Current_Location",
    "Status",
    "Age_Years",
    "CO2_Emissions_Kg_per_KM",
];

/// Reads `routes_distance.csv` and `vehicle_fleet.csv` from a data directory.
#[derive(Debug, Clone)]
pub struct CsvNetworkParser {
    routes_file: String,
    vehicles_file: String,
}

impl Default for CsvNetworkParser {
    fn default() -> Self {
        CsvNetworkParser {
            routes_file: String::from(ROUTES_FILE),
            vehicles_file: String::from(VEHICLES_FILE),
        }
    }
}

impl CsvNetworkParser {
    pub fn with_file_names(
        routes_file: impl Into<String>,
        vehicles_file: impl Into<String>,
    ) -> Self {
        CsvNetworkParser {
            routes_file: routes_file.into(),
            vehicles_file: vehicles_file.into(),
        }
    }
}

impl CsvNetworkParser {
    /// Loads the network and reports the completeness of both tables.
    #[instrument(skip_all, level = "debug")]
    pub fn parse_with_quality<P: AsRef<Path>>(
        &self,
        data_dir: P,
    ) -> Result<(LogisticsNetwork, DataQualityReport), anyhow::Error> {
        let data_dir = data_dir.as_ref();

        let (raw_routes, routes_quality): (Vec<RawRoute>, _) =
            read_table(&data_dir.join(&self.routes_file), &ROUTE_COLUMNS)?;
        let (raw_vehicles, vehicles_quality): (Vec<RawVehicle>, _) =
            read_table(&data_dir.join(&self.vehicles_file), &VEHICLE_COLUMNS)?;

        let routes = preprocess_routes(raw_routes)?;
        let vehicles = preprocess_vehicles(raw_vehicles)?;

        info!(
            data_dir = %data_dir.display(),
            routes = routes.len(),
            vehicles = vehicles.len(),
            "Loaded logistics network"
        );

        let report = DataQualityReport {
            datasets: vec![routes_quality, vehicles_quality],
        };

        Ok((LogisticsNetwork::new(routes, vehicles), report))
    }

    /// Completeness of both tables without preprocessing them, so rows the
    /// loader would reject are still counted.
    pub fn quality_report<P: AsRef<Path>>(
        &self,
        data_dir: P,
    ) -> Result<DataQualityReport, NetworkLoadError> {
        let data_dir = data_dir.as_ref();

        let tables: [(&String, &[&'static str]); 2] = [
            (&self.routes_file, &ROUTE_COLUMNS),
            (&self.vehicles_file, &VEHICLE_COLUMNS),
        ];

        let datasets = tables
            .into_iter()
            .map(|(file_name, columns)| {
                let path = data_dir.join(file_name);
                let (headers, rows) = read_rows(&path, columns)?;
                Ok(assess_table(&dataset_name(&path), &headers, &rows))
            })
            .collect::<Result<Vec<_>, NetworkLoadError>>()?;

        Ok(DataQualityReport { datasets })
    }
}

impl NetworkParser for CsvNetworkParser {
    fn parse<P: AsRef<Path>>(&self, data_dir: P) -> Result<LogisticsNetwork, anyhow::Error> {
        self.parse_with_quality(data_dir).map(|(network, _)| network)
    }
}

/// File stem used to label a table in quality reports.
fn dataset_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn csv_error(path: &Path) -> impl Fn(csv::Error) -> NetworkLoadError + '_ {
    move |source| NetworkLoadError::Csv {
        file: path.display().to_string(),
        source,
    }
}

/// Reads the trimmed header and rows of `path` after checking the header
/// carries `required_columns`.
fn read_rows(
    path: &Path,
    required_columns: &[&'static str],
) -> Result<(StringRecord, Vec<StringRecord>), NetworkLoadError> {
    if !path.is_file() {
        return Err(NetworkLoadError::FileNotFound(PathBuf::from(path)));
    }

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(csv_error(path))?;

    let headers = reader.headers().map_err(csv_error(path))?.clone();
    let missing: Vec<&'static str> = required_columns
        .iter()
        .copied()
        .filter(|column| !headers.iter().any(|header| header == *column))
        .collect();
    if !missing.is_empty() {
        return Err(NetworkLoadError::MissingColumns {
            file: path.display().to_string(),
            columns: missing,
        });
    }

    let rows = reader
        .records()
        .collect::<Result<Vec<_>, csv::Error>>()
        .map_err(csv_error(path))?;

    Ok((headers, rows))
}

/// Deserializes every row of `path` and assesses the table's completeness.
pub fn read_table<T: DeserializeOwned>(
    path: &Path,
    required_columns: &[&'static str],
) -> Result<(Vec<T>, DatasetQuality), NetworkLoadError> {
    let (headers, rows) = read_rows(path, required_columns)?;
    let quality = assess_table(&dataset_name(path), &headers, &rows);

    let records = rows
        .iter()
        .map(|row| row.deserialize(Some(&headers)))
        .collect::<Result<Vec<T>, csv::Error>>()
        .map_err(csv_error(path))?;

    Ok((records, quality))
}

/// Deserializes every row of `path` after checking the header carries
/// `required_columns`.
pub fn read_records<T: DeserializeOwned>(
    path: &Path,
    required_columns: &[&'static str],
) -> Result<Vec<T>, NetworkLoadError> {
    read_table(path, required_columns).map(|(records, _)| records)
}
