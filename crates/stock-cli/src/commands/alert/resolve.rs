use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::{output, print_page};

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.ensure_manager("resolve alerts")?;

    let resolved = ctx.client.resolve_alert(id).await?;
    tracing::info!(id = resolved.id, "alert resolved");
    output(&resolved, flags.format)?;

    let (snapshot, pager) = super::list::fetch(None, None, ctx).await?;
    print_page(&snapshot, &pager, flags.format)
}
