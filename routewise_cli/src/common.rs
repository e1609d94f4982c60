use std::{fs::File, io::BufReader, path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::Args;
use routewise_optimizer::{
    parsers::{csv_network::CsvNetworkParser, parser::NetworkParser},
    problem::logistics_network::LogisticsNetwork,
    solver::optimizer_params::OptimizerParams,
};
use serde::Serialize;
use tracing::info;

#[derive(Args)]
pub struct DataArgs {
    /// Directory holding routes_distance.csv and vehicle_fleet.csv
    #[arg(long, env = "ROUTEWISE_DATA_DIR", default_value = "./data")]
    pub data: PathBuf,
}

impl DataArgs {
    pub fn load_network(&self) -> anyhow::Result<Arc<LogisticsNetwork>> {
        let network = CsvNetworkParser::default()
            .parse(&self.data)
            .with_context(|| format!("failed to load network from {}", self.data.display()))?;
        Ok(Arc::new(network))
    }
}

#[derive(Args)]
pub struct ParamsArgs {
    /// JSON file overriding cost rates and emission factors
    #[arg(long)]
    pub rates: Option<PathBuf>,
}

impl ParamsArgs {
    pub fn load_params(&self) -> anyhow::Result<OptimizerParams> {
        let Some(path) = &self.rates else {
            return Ok(OptimizerParams::default());
        };

        let file = File::open(path)
            .with_context(|| format!("failed to open rates file {}", path.display()))?;
        let params: OptimizerParams = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("invalid rates file {}", path.display()))?;
        info!(rates = %path.display(), "Loaded rate overrides");

        Ok(params)
    }
}

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
