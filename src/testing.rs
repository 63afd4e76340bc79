use crate::builder::ReportBuilder;
use crate::report::Report;
use crate::types::ReportDate;

/// A builder that produces no report of its own, only a log of the
/// calls it received.
#[derive(Default)]
pub struct RecordingBuilder {
    pub calls: Vec<String>,
}

impl RecordingBuilder {
    fn record(&mut self, call: String) -> &mut Self {
        self.calls.push(call);
        self
    }
}

fn list<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items.into_iter().map(Into::into).collect::<Vec<_>>().join("|")
}

impl ReportBuilder for RecordingBuilder {
    fn title(&mut self, v: impl Into<String>) -> &mut Self {
        self.record(format!("title({})", v.into()))
    }
    fn format(&mut self, v: impl Into<String>) -> &mut Self {
        self.record(format!("format({})", v.into()))
    }
    fn start_date(&mut self, v: ReportDate) -> &mut Self {
        self.record(format!("start_date({v})"))
    }
    fn end_date(&mut self, v: ReportDate) -> &mut Self {
        self.record(format!("end_date({v})"))
    }
    fn include_header(&mut self, v: bool) -> &mut Self {
        self.record(format!("include_header({v})"))
    }
    fn include_footer(&mut self, v: bool) -> &mut Self {
        self.record(format!("include_footer({v})"))
    }
    fn header_text(&mut self, v: impl Into<String>) -> &mut Self {
        self.record(format!("header_text({})", v.into()))
    }
    fn footer_text(&mut self, v: impl Into<String>) -> &mut Self {
        self.record(format!("footer_text({})", v.into()))
    }
    fn include_charts(&mut self, v: bool) -> &mut Self {
        self.record(format!("include_charts({v})"))
    }
    fn chart_type(&mut self, v: impl Into<String>) -> &mut Self {
        self.record(format!("chart_type({})", v.into()))
    }
    fn include_summary(&mut self, v: bool) -> &mut Self {
        self.record(format!("include_summary({v})"))
    }
    fn columns<I, S>(&mut self, v: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.record(format!("columns({})", list(v)))
    }
    fn filters<I, S>(&mut self, v: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.record(format!("filters({})", list(v)))
    }
    fn sort_by(&mut self, v: impl Into<String>) -> &mut Self {
        self.record(format!("sort_by({})", v.into()))
    }
    fn group_by(&mut self, v: impl Into<String>) -> &mut Self {
        self.record(format!("group_by({})", v.into()))
    }
    fn include_totals(&mut self, v: bool) -> &mut Self {
        self.record(format!("include_totals({v})"))
    }
    fn orientation(&mut self, v: impl Into<String>) -> &mut Self {
        self.record(format!("orientation({})", v.into()))
    }
    fn page_size(&mut self, v: impl Into<String>) -> &mut Self {
        self.record(format!("page_size({})", v.into()))
    }
    fn include_page_numbers(&mut self, v: bool) -> &mut Self {
        self.record(format!("include_page_numbers({v})"))
    }
    fn company_logo(&mut self, v: impl Into<String>) -> &mut Self {
        self.record(format!("company_logo({})", v.into()))
    }
    fn watermark(&mut self, v: impl Into<String>) -> &mut Self {
        self.record(format!("watermark({})", v.into()))
    }
    fn build(&mut self) -> Report {
        self.record("build".to_string());
        Report::default()
    }
    fn reset(&mut self) {
        self.record("reset".to_string());
    }
}
