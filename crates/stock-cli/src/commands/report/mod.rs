mod monthly;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ReportCommands;
use crate::context::AppContext;

/// Handle `stk report <subcommand>`.
pub async fn handle(
    action: &ReportCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ReportCommands::Monthly { month, year } => monthly::run(*month, *year, ctx, flags).await,
    }
}
