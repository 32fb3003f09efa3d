use clap::Subcommand;

/// Account administration commands (admin).
#[derive(Clone, Debug, Subcommand)]
pub enum UserCommands {
    /// List accounts, paginated.
    List {
        /// Page to fetch (1-based).
        #[arg(long)]
        page: Option<u32>,
    },
    /// Register an account.
    Create {
        email: String,
        #[arg(long)]
        password: String,
        /// viewer, manager, or admin.
        #[arg(long, default_value = "viewer")]
        role: String,
    },
    /// Change an account's role.
    SetRole {
        id: i64,
        /// viewer, manager, or admin.
        role: String,
    },
    /// Delete an account (asks for confirmation).
    Delete { id: i64 },
}
