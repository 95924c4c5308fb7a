//! CLI entry point for box-counting earthquake catalogs

use clap::Parser;
use seisfractal::io::cli::{Cli, FileProcessor};
use seisfractal::io::logging::init_logging;

fn main() -> seisfractal::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
