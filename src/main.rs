use std::process::ExitCode;

use clap::Parser;

use fontsub::cli::{self, Cli};
use fontsub::utils::logging;

fn main() -> ExitCode {
    let args = Cli::parse();
    logging::init(args.debug);
    cli::execute(&args)
}
