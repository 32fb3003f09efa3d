use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    AlertCommands, AuthCommands, ItemCommands, ReportCommands, UserCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Authentication and session status.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Inventory items.
    Item {
        #[command(subcommand)]
        action: ItemCommands,
    },
    /// Console accounts (admin).
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Stock and manual alerts.
    Alert {
        #[command(subcommand)]
        action: AlertCommands,
    },
    /// View the audit trail (admin).
    Audit(AuditArgs),
    /// Inventory dashboard: summary cards and quantity trends.
    Dashboard,
    /// Reports (admin).
    Report {
        #[command(subcommand)]
        action: ReportCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct AuditArgs {
    /// Page to fetch (1-based).
    #[arg(long)]
    pub page: Option<u32>,
    /// Only entries recorded for this user id.
    #[arg(long)]
    pub user: Option<i64>,
}
