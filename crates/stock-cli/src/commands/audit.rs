use crate::cli::GlobalFlags;
use crate::cli::root_commands::AuditArgs;
use crate::context::AppContext;
use crate::output::print_page;

/// Handle `stk audit` — a read-only view of the append-only trail, so there
/// is no submodule tree here, just the paginated fetch.
pub async fn handle(
    args: &AuditArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut pager = ctx.pager(args.page);
    let snapshot = ctx.client.list_audit_logs(pager.query(), args.user).await?;
    pager.apply(&snapshot);
    print_page(&snapshot, &pager, flags.format)
}
