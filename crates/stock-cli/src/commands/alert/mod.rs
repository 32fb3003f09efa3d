mod create;
mod delete;
pub mod list;
mod resolve;
mod watch;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AlertCommands;
use crate::context::AppContext;

/// Handle `stk alert <subcommand>`.
pub async fn handle(
    action: &AlertCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AlertCommands::List { page, status } => {
            list::run(*page, status.as_deref(), ctx, flags).await
        }
        AlertCommands::Create { message, item } => create::run(message, *item, ctx, flags).await,
        AlertCommands::Resolve { id } => resolve::run(*id, ctx, flags).await,
        AlertCommands::Delete { id } => delete::run(*id, ctx, flags).await,
        AlertCommands::Watch => watch::run(ctx, flags).await,
    }
}
