use anyhow::Result;
use clap::Parser;
use dna_segment_data::cli::Cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dna_segment_data=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    cli.run()
}
