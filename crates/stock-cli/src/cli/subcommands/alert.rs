use clap::Subcommand;

/// Alert commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AlertCommands {
    /// List alerts, paginated, optionally filtered by status.
    List {
        /// Page to fetch (1-based).
        #[arg(long)]
        page: Option<u32>,
        /// active or resolved; omit for all.
        #[arg(long)]
        status: Option<String>,
    },
    /// Create a manual alert (manager or admin).
    Create {
        /// Alert message.
        message: String,
        /// Related item id, if any.
        #[arg(long)]
        item: Option<i64>,
    },
    /// Mark an alert resolved (manager or admin).
    Resolve { id: i64 },
    /// Delete an alert (admin, asks for confirmation).
    Delete { id: i64 },
    /// Live view: active-alert count every poll interval plus the token
    /// expiry countdown. Ctrl-C exits.
    Watch,
}
