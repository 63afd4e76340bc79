use std::fmt;

use clap::ValueEnum;
use tracing::debug;

use crate::builder::ReportBuilder;
use crate::report::Report;
use crate::types::ReportDate;

/// Drives a builder through the canned report configurations.
///
/// The director is stateless and never reads or resets the builder: each
/// preset only issues its own setter calls, in a fixed order, then asks for
/// the result. Whatever the builder held before is left in place unless a
/// preset overwrites it.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReportDirector;

impl ReportDirector {
    pub fn new() -> Self {
        Self
    }

    /// Full configuration: every setting is given.
    pub fn monthly_sales<B: ReportBuilder>(&self, builder: &mut B) -> Report {
        debug!(preset = %Preset::MonthlySales, "configuring builder");
        builder
            .title("Vendas Mensais")
            .format("PDF")
            .start_date(date(2024, 1, 1))
            .end_date(date(2024, 1, 31))
            .include_header(true)
            .include_footer(true)
            .header_text("Relatório de Vendas")
            .footer_text("Confidencial")
            .include_charts(true)
            .chart_type("Bar")
            .include_summary(true)
            .columns(["Produto", "Quantidade", "Valor"])
            .filters(["Status=Ativo"])
            .sort_by("Valor")
            .group_by("Categoria")
            .include_totals(true)
            .orientation("Portrait")
            .page_size("A4")
            .include_page_numbers(true)
            .company_logo("logo.png")
            .watermark("Confidencial");
        builder.build()
    }

    /// Partial configuration. Header text, footer, filters, sorting,
    /// summary, layout and branding come from whatever the builder holds.
    pub fn quarterly_report<B: ReportBuilder>(&self, builder: &mut B) -> Report {
        debug!(preset = %Preset::QuarterlyReport, "configuring builder");
        builder
            .title("Relatório Trimestral")
            .format("Excel")
            .start_date(date(2024, 1, 1))
            .end_date(date(2024, 3, 31))
            .columns(["Vendedor", "Região", "Total"])
            .include_charts(true)
            .chart_type("Line")
            .include_header(true)
            .group_by("Região")
            .include_totals(true);
        builder.build()
    }

    /// Partial configuration: no filters, sorting, grouping, summary or
    /// page numbers are set here.
    pub fn annual_sales<B: ReportBuilder>(&self, builder: &mut B) -> Report {
        debug!(preset = %Preset::AnnualSales, "configuring builder");
        builder
            .title("Vendas Anuais")
            .format("PDF")
            .start_date(date(2024, 1, 1))
            .end_date(date(2024, 12, 31))
            .include_header(true)
            .header_text("Relatório de Vendas")
            .include_footer(true)
            .footer_text("Confidencial")
            .columns(["Produto", "Quantidade", "Valor"])
            .include_charts(true)
            .chart_type("Pie")
            .include_totals(true)
            .orientation("Landscape")
            .page_size("A4");
        builder.build()
    }
}

// Only called with literal calendar dates.
fn date(year: i32, month: u32, day: u32) -> ReportDate {
    ReportDate::from_ymd(year, month, day).unwrap_or_default()
}

/// The named presets, selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    MonthlySales,
    QuarterlyReport,
    AnnualSales,
}

impl Preset {
    /// Every preset, in the order the program runs them.
    pub const ALL: [Preset; 3] = [
        Preset::MonthlySales,
        Preset::QuarterlyReport,
        Preset::AnnualSales,
    ];

    pub fn apply<B: ReportBuilder>(self, director: &ReportDirector, builder: &mut B) -> Report {
        match self {
            Preset::MonthlySales => director.monthly_sales(builder),
            Preset::QuarterlyReport => director.quarterly_report(builder),
            Preset::AnnualSales => director.annual_sales(builder),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Preset::MonthlySales => "monthly-sales",
            Preset::QuarterlyReport => "quarterly-report",
            Preset::AnnualSales => "annual-sales",
        };
        f.write_str(name)
    }
}
