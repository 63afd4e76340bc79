use std::io::Write;

use tracing::{debug, info, warn};

use crate::builder::{ReportBuilder, SalesReportBuilder};
use crate::config::RunConfig;
use crate::director::ReportDirector;
use crate::error::ReportError;
use crate::report::Report;

/// Sequences one run: banner, then each configured preset built and rendered.
pub struct Runner {
    config: RunConfig,
    director: ReportDirector,
}

impl Runner {
    pub fn new(config: RunConfig) -> Self {
        Self {
            config,
            director: ReportDirector::new(),
        }
    }

    /// Render every preset into `out`, returning the reports in order.
    /// One builder serves the whole run; with `fresh_builder` it is reset
    /// before each preset.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<Vec<Report>, ReportError> {
        self.run_with(&mut SalesReportBuilder::new(), out)
    }

    /// Same as [`Runner::run`], driving the given builder.
    pub fn run_with<B, W>(&self, builder: &mut B, out: &mut W) -> Result<Vec<Report>, ReportError>
    where
        B: ReportBuilder,
        W: Write,
    {
        debug!(config = ?self.config, "starting run");
        writeln!(out, "{}", self.config.banner)?;

        let mut reports = Vec::with_capacity(self.config.presets.len());

        for &preset in &self.config.presets {
            if self.config.fresh_builder {
                builder.reset();
            }

            let report = preset.apply(&self.director, builder);
            if self.config.validate {
                if let Err(err) = report.validate() {
                    warn!(%preset, error = %err, "preset produced an invalid report");
                    return Err(err);
                }
            }

            report.render_to(out)?;
            info!(%preset, title = %report.title, "report rendered");
            reports.push(report);
        }

        Ok(reports)
    }
}
