use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::source::DEFAULT_SOURCE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Plain,
    Table,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub source: PathBuf,
    /// Numbers above this value get the tail annotation.
    pub tail_threshold: u32,
    pub format: ReportFormat,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            tail_threshold: 40,
            format: ReportFormat::Plain,
        }
    }
}
