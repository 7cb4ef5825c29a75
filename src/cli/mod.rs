// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses command line arguments with clap and hands off to
// the use cases in Layer 2. This layer only routes and prints.
//
//   inspect — summarise a split, preview samples, test a batch
//   export  — write tokenised samples as JSON lines

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, ExportArgs, InspectArgs};

#[derive(Parser, Debug)]
#[command(
    name = "dna-segment",
    version,
    about = "Labelled, tokenised DNA segments from FASTA files for sequence classification."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Inspect(args) => run_inspect(args),
            Commands::Export(args)  => run_export(args),
        }
    }
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    use crate::application::inspect_use_case::InspectUseCase;

    let config = args.dataset.resolve()?;
    let report = InspectUseCase::new(config, args.num_samples, args.batch_size).execute()?;
    print!("{report}");
    Ok(())
}

fn run_export(args: ExportArgs) -> Result<()> {
    use crate::application::export_use_case::ExportUseCase;

    let config = args.dataset.resolve()?;
    let count  = ExportUseCase::new(config, &args.output).execute()?;
    println!("Exported {} samples to {}", count, args.output.display());
    Ok(())
}
