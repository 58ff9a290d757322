//! Selector enums for CLI commands.

use std::fmt;

/// Which group of analytics the `analytics` command prints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum AnalyticsKind {
    /// Top stats, type distribution, dual types and move coverage
    Stats,
    /// Best attacking and defensive types
    Types,
    /// Everything
    #[default]
    All,
}

impl AnalyticsKind {
    pub fn includes_stats(&self) -> bool {
        matches!(self, AnalyticsKind::Stats | AnalyticsKind::All)
    }

    pub fn includes_types(&self) -> bool {
        matches!(self, AnalyticsKind::Types | AnalyticsKind::All)
    }
}

impl fmt::Display for AnalyticsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AnalyticsKind::Stats => "stats",
            AnalyticsKind::Types => "types",
            AnalyticsKind::All => "all",
        };
        write!(f, "{}", s)
    }
}
