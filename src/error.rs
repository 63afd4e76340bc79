use thiserror::Error;

use crate::types::ReportDate;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    #[error(
        "invalid report: {}",
        .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
    )]
    Invalid(Vec<ValidationIssue>),
}

/// One reason a finished report is not fit to render.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("title is empty")]
    EmptyTitle,

    #[error("format is empty")]
    EmptyFormat,

    #[error("no columns configured")]
    NoColumns,

    #[error("end date {end} is before start date {start}")]
    EndBeforeStart { start: ReportDate, end: ReportDate },
}
