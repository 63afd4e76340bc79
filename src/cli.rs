use clap::Parser;

use crate::config::RunConfig;
use crate::director::Preset;

/// Builds canned sales reports with a builder and a director and prints them
#[derive(Parser, Debug)]
#[command(
    name = "report-builder",
    version,
    long_about = "Builds the canned sales reports (monthly, quarterly, annual) through a \
                  report director and prints each one.\n\n\
                  With no arguments every preset runs against one shared builder, so \
                  later reports inherit settings the earlier ones left behind.\n\n\
                  Examples:\n  \
                  report-builder\n  \
                  report-builder --fresh\n  \
                  report-builder --preset quarterly-report --validate"
)]
pub struct CliArgs {
    #[arg(
        short = 'p',
        long = "preset",
        value_enum,
        value_name = "PRESET",
        help = "Preset to build (repeatable, defaults to all in order)"
    )]
    pub presets: Vec<Preset>,

    #[arg(long, help = "Reset the builder before each preset")]
    pub fresh: bool,

    #[arg(long, help = "Reject reports missing a title, format or columns, or with a backwards date range")]
    pub validate: bool,

    #[arg(long, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, help = "Debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        conflicts_with = "verbose",
        help = "Quiet mode - errors only"
    )]
    pub quiet: bool,
}

impl CliArgs {
    pub fn to_config(&self) -> RunConfig {
        RunConfig::builder()
            .presets(self.presets.clone())
            .fresh_builder(self.fresh)
            .validate(self.validate)
            .build()
    }
}
