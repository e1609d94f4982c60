pub mod csv_network;
pub mod data_quality;
pub mod parser;
pub mod preprocessing;
