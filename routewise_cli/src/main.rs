use clap::{Parser, Subcommand, ValueEnum};
use mimalloc::MiMalloc;
use routewise_optimizer::json::schema;

use crate::{
    batch::BatchArgs,
    estimate::{CostArgs, EmissionsArgs, SensitivityArgs},
    fleet::FleetArgs,
    optimize::OptimizeArgs,
    quality::QualityArgs,
};

mod batch;
mod common;
mod estimate;
mod fleet;
mod optimize;
mod quality;
mod tables;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank every route-vehicle combination for one order
    #[command(visible_alias = "o")]
    Optimize {
        #[command(flatten)]
        args: OptimizeArgs,
    },
    /// Optimize every order of a requests file in parallel
    Batch {
        #[command(flatten)]
        args: BatchArgs,
    },
    /// Itemized cost of a single trip
    Cost {
        #[command(flatten)]
        args: CostArgs,
    },
    /// Cost impact of moving one rate up and down
    Sensitivity {
        #[command(flatten)]
        args: SensitivityArgs,
    },
    /// Emissions, offset cost and efficiency rating of a single trip
    Emissions {
        #[command(flatten)]
        args: EmissionsArgs,
    },
    /// Fleet utilization and known locations
    Fleet {
        #[command(flatten)]
        args: FleetArgs,
    },
    /// Missing cells and duplicate rows of the data tables
    Quality {
        #[command(flatten)]
        args: QualityArgs,
    },
    /// Print a JSON schema
    Schema {
        #[arg(long, value_enum, default_value_t = SchemaKind::Outcome)]
        kind: SchemaKind,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SchemaKind {
    /// Optimization outcome
    Outcome,
    /// Batch request record
    Request,
    /// Rates override file
    Params,
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Optimize { args } => optimize::run(args)?,
        Commands::Batch { args } => batch::run(args)?,
        Commands::Cost { args } => estimate::run_cost(args)?,
        Commands::Sensitivity { args } => estimate::run_sensitivity(args)?,
        Commands::Emissions { args } => estimate::run_emissions(args)?,
        Commands::Fleet { args } => fleet::run(args)?,
        Commands::Quality { args } => quality::run(args)?,
        Commands::Schema { kind } => {
            let schema = match kind {
                SchemaKind::Outcome => schema::generate_json_schema()?,
                SchemaKind::Request => schema::generate_request_schema()?,
                SchemaKind::Params => schema::generate_params_schema()?,
            };
            println!("{schema}");
        }
    }

    Ok(())
}
