use clap::Subcommand;

/// Report commands (admin).
#[derive(Clone, Debug, Subcommand)]
pub enum ReportCommands {
    /// Monthly inventory report: stock snapshot, category breakdown, and
    /// the month's activity.
    Monthly {
        /// Month 1-12 (defaults to the current month server-side).
        #[arg(long)]
        month: Option<u32>,
        /// Four-digit year (defaults to the current year server-side).
        #[arg(long)]
        year: Option<i32>,
    },
}
