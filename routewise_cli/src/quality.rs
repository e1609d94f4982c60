use anyhow::Context;
use clap::Args;
use routewise_optimizer::parsers::csv_network::CsvNetworkParser;

use crate::{
    common::{DataArgs, print_json},
    tables::data_quality_table,
};

#[derive(Args)]
pub struct QualityArgs {
    #[command(flatten)]
    data: DataArgs,

    #[arg(long)]
    json: bool,
}

pub fn run(args: QualityArgs) -> anyhow::Result<()> {
    let report = CsvNetworkParser::default()
        .quality_report(&args.data.data)
        .with_context(|| format!("failed to read tables in {}", args.data.data.display()))?;

    if args.json {
        return print_json(&report);
    }

    println!("{}", data_quality_table(&report));
    if !report.has_issues() {
        println!("No missing cells or duplicate rows");
    }

    Ok(())
}
