//! Report configuration through a builder and a director.
//!
//! [`builder::ReportBuilder`] is the settable surface of a report,
//! [`director::ReportDirector`] drives it through the canned presets, and
//! [`report::Report`] renders the result as text.

pub mod builder;
pub mod cli;
pub mod config;
pub mod director;
pub mod error;
pub mod logging;
pub mod report;
pub mod runner;
pub mod types;

#[cfg(test)]
mod testing;
