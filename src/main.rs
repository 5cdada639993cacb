//! CLI entry point for tile adjacency rule authoring

use clap::Parser;
use tilerules::io::cli::Cli;
use tilerules::io::logging::init_logging;

fn main() -> tilerules::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet);
    cli.run()
}
