use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Log in with email and password.
    Login(AuthLoginArgs),
    /// Clear the session and stored credentials.
    Logout,
    /// Show current session state, identity, and token lifetime.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    /// Account email.
    pub email: String,
    /// Password (prompted when omitted).
    #[arg(long)]
    pub password: Option<String>,
}
