mod create;
mod delete;
pub mod list;
mod set_role;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::UserCommands;
use crate::context::AppContext;

/// Handle `stk user <subcommand>`.
pub async fn handle(
    action: &UserCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        UserCommands::List { page } => list::run(*page, ctx, flags).await,
        UserCommands::Create {
            email,
            password,
            role,
        } => create::run(email, password, role, ctx, flags).await,
        UserCommands::SetRole { id, role } => set_role::run(*id, role, ctx, flags).await,
        UserCommands::Delete { id } => delete::run(*id, ctx, flags).await,
    }
}
