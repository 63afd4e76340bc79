use std::fmt;
use std::io::{self, Write};

use crate::error::{ReportError, ValidationIssue};
use crate::types::ReportDate;

/// A fully configured report: a bag of independent, optional settings.
///
/// Nothing here is enforced. Fields left alone keep their zero value
/// (empty string, `false`, empty list, `01/01/0001`) and rendering simply
/// shows fewer or emptier lines. Use [`Report::validate`] to check the
/// settings a usable report needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub title: String,
    pub format: String,
    pub start_date: ReportDate,
    pub end_date: ReportDate,
    pub include_header: bool,
    pub header_text: String,
    pub include_footer: bool,
    pub footer_text: String,
    pub include_charts: bool,
    pub chart_type: String,
    pub include_summary: bool,
    pub columns: Vec<String>,
    pub filters: Vec<String>,
    pub sort_by: String,
    pub group_by: String,
    pub include_totals: bool,
    pub orientation: String,
    pub page_size: String,
    pub include_page_numbers: bool,
    pub company_logo: String,
    pub watermark: String,
}

pub const SUCCESS_LINE: &str = "Relatório gerado com sucesso!";

impl Report {
    /// Print the summary to stdout. Never fails.
    pub fn render(&self) {
        print!("{self}");
    }

    /// Write the summary to any sink.
    pub fn render_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }

    /// Check the settings a report can't sensibly render without.
    /// Every problem is collected, not only the first one.
    pub fn validate(&self) -> Result<(), ReportError> {
        let mut issues = Vec::new();

        if self.title.is_empty() {
            issues.push(ValidationIssue::EmptyTitle);
        }
        if self.format.is_empty() {
            issues.push(ValidationIssue::EmptyFormat);
        }
        if self.columns.is_empty() {
            issues.push(ValidationIssue::NoColumns);
        }
        if self.end_date < self.start_date {
            issues.push(ValidationIssue::EndBeforeStart {
                start: self.start_date,
                end: self.end_date,
            });
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(ReportError::Invalid(issues))
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "=== Gerando Relatório: {} ===", self.title)?;
        writeln!(f, "Formato: {}", self.format)?;
        writeln!(f, "Período: {} a {}", self.start_date, self.end_date)?;

        if self.include_header {
            writeln!(f, "Cabeçalho: {}", self.header_text)?;
        }

        if self.include_charts {
            writeln!(f, "Gráfico: {}", self.chart_type)?;
        }

        writeln!(f, "Colunas: {}", self.columns.join(", "))?;

        if !self.filters.is_empty() {
            writeln!(f, "Filtros: {}", self.filters.join(", "))?;
        }

        if !self.group_by.is_empty() {
            writeln!(f, "Agrupado por: {}", self.group_by)?;
        }

        if self.include_footer {
            writeln!(f, "Rodapé: {}", self.footer_text)?;
        }

        writeln!(f, "{SUCCESS_LINE}")
    }
}
