//! CLI entry point for the figure decomposition tool

use clap::Parser;
use rectcarve::io::cli::{Cli, FileProcessor};

fn main() -> rectcarve::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
