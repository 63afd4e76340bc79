use std::mem;

use crate::error::ReportError;
use crate::report::Report;
use crate::types::ReportDate;

/// The set of report settings a director can drive.
///
/// One setter per field, each assigning exactly that field. Setters return
/// `&mut Self` so calls chain. Implementors decide what a "report" means for
/// their output medium; the director only talks to this trait.
pub trait ReportBuilder {
    fn title(&mut self, title: impl Into<String>) -> &mut Self;
    fn format(&mut self, format: impl Into<String>) -> &mut Self;
    fn start_date(&mut self, date: ReportDate) -> &mut Self;
    fn end_date(&mut self, date: ReportDate) -> &mut Self;
    fn include_header(&mut self, include: bool) -> &mut Self;
    fn include_footer(&mut self, include: bool) -> &mut Self;
    fn header_text(&mut self, text: impl Into<String>) -> &mut Self;
    fn footer_text(&mut self, text: impl Into<String>) -> &mut Self;
    fn include_charts(&mut self, include: bool) -> &mut Self;
    fn chart_type(&mut self, chart_type: impl Into<String>) -> &mut Self;
    fn include_summary(&mut self, include: bool) -> &mut Self;
    fn columns<I, S>(&mut self, columns: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>;
    fn filters<I, S>(&mut self, filters: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>;
    fn sort_by(&mut self, field: impl Into<String>) -> &mut Self;
    fn group_by(&mut self, field: impl Into<String>) -> &mut Self;
    fn include_totals(&mut self, include: bool) -> &mut Self;
    fn orientation(&mut self, orientation: impl Into<String>) -> &mut Self;
    fn page_size(&mut self, page_size: impl Into<String>) -> &mut Self;
    fn include_page_numbers(&mut self, include: bool) -> &mut Self;
    fn company_logo(&mut self, logo: impl Into<String>) -> &mut Self;
    fn watermark(&mut self, text: impl Into<String>) -> &mut Self;

    /// Snapshot the report as configured so far. The builder keeps its
    /// state: further setter calls layer on top of it, but never touch the
    /// report already returned.
    fn build(&mut self) -> Report;

    /// Drop everything configured so far.
    fn reset(&mut self);

    /// Build, then start over from an empty report.
    fn finish(&mut self) -> Report {
        let report = self.build();
        self.reset();
        report
    }

    /// Build and reject reports missing a title, format or columns, or
    /// whose date range runs backwards. Builder state is left as is.
    fn build_validated(&mut self) -> Result<Report, ReportError> {
        let report = self.build();
        report.validate()?;
        Ok(report)
    }
}

/// Builds [`Report`] values for the console renderer.
#[derive(Debug, Default)]
pub struct SalesReportBuilder {
    report: Report,
}

impl SalesReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The report in progress.
    pub fn current(&self) -> &Report {
        &self.report
    }
}

impl ReportBuilder for SalesReportBuilder {
    fn title(&mut self, title: impl Into<String>) -> &mut Self {
        self.report.title = title.into();
        self
    }

    fn format(&mut self, format: impl Into<String>) -> &mut Self {
        self.report.format = format.into();
        self
    }

    fn start_date(&mut self, date: ReportDate) -> &mut Self {
        self.report.start_date = date;
        self
    }

    fn end_date(&mut self, date: ReportDate) -> &mut Self {
        self.report.end_date = date;
        self
    }

    fn include_header(&mut self, include: bool) -> &mut Self {
        self.report.include_header = include;
        self
    }

    fn include_footer(&mut self, include: bool) -> &mut Self {
        self.report.include_footer = include;
        self
    }

    fn header_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.report.header_text = text.into();
        self
    }

    fn footer_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.report.footer_text = text.into();
        self
    }

    fn include_charts(&mut self, include: bool) -> &mut Self {
        self.report.include_charts = include;
        self
    }

    fn chart_type(&mut self, chart_type: impl Into<String>) -> &mut Self {
        self.report.chart_type = chart_type.into();
        self
    }

    fn include_summary(&mut self, include: bool) -> &mut Self {
        self.report.include_summary = include;
        self
    }

    fn columns<I, S>(&mut self, columns: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.report.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    fn filters<I, S>(&mut self, filters: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.report.filters = filters.into_iter().map(Into::into).collect();
        self
    }

    fn sort_by(&mut self, field: impl Into<String>) -> &mut Self {
        self.report.sort_by = field.into();
        self
    }

    fn group_by(&mut self, field: impl Into<String>) -> &mut Self {
        self.report.group_by = field.into();
        self
    }

    fn include_totals(&mut self, include: bool) -> &mut Self {
        self.report.include_totals = include;
        self
    }

    fn orientation(&mut self, orientation: impl Into<String>) -> &mut Self {
        self.report.orientation = orientation.into();
        self
    }

    fn page_size(&mut self, page_size: impl Into<String>) -> &mut Self {
        self.report.page_size = page_size.into();
        self
    }

    fn include_page_numbers(&mut self, include: bool) -> &mut Self {
        self.report.include_page_numbers = include;
        self
    }

    fn company_logo(&mut self, logo: impl Into<String>) -> &mut Self {
        self.report.company_logo = logo.into();
        self
    }

    fn watermark(&mut self, text: impl Into<String>) -> &mut Self {
        self.report.watermark = text.into();
        self
    }

    fn build(&mut self) -> Report {
        self.report.clone()
    }

    fn reset(&mut self) {
        self.report = Report::default();
    }

    // No clone needed when the state is thrown away anyway.
    fn finish(&mut self) -> Report {
        mem::take(&mut self.report)
    }
}
