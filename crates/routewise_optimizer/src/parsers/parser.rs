use std::path::Path;

use crate::problem::logistics_network::LogisticsNetwork;

/// Loads the route and vehicle tables from a data directory.
pub trait NetworkParser {
    fn parse<P: AsRef<Path>>(&self, data_dir: P) -> Result<LogisticsNetwork, anyhow::Error>;
}
