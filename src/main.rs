//! CLI entry point for the paint-by-numbers page generator

use clap::Parser;
use paintnum::io::cli::{Cli, Processor};

fn main() -> paintnum::Result<()> {
    let cli = Cli::parse();
    let processor = Processor::new(cli);
    processor.run()
}
