use std::io;

use clap::Parser;

use report_builder::cli::CliArgs;
use report_builder::error::ReportError;
use report_builder::logging;
use report_builder::runner::Runner;

fn main() -> Result<(), ReportError> {
    let args = CliArgs::parse();
    logging::init(args.log_level.as_deref(), args.verbose, args.quiet);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    Runner::new(args.to_config()).run(&mut out)?;

    Ok(())
}
