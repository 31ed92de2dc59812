//! Convert JUnit XML test reports into a Common Test Report Format (CTRF)
//! JSON report.

pub mod classify;
pub mod cli;
pub mod config;
pub mod convert;
pub mod ctrf;
pub mod error;
pub mod glob;
pub mod junit;
pub mod loader;
pub mod report;

pub use cli::{Cli, OutputTarget};
pub use config::Config;
pub use convert::{ConvertOptions, Conversion, Warning, convert, write_report};
pub use ctrf::{Report, Status, Summary, Test};
pub use error::{Error, ExitCode, Result};
pub use junit::{Outcome, RawTestCase};
