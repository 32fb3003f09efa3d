use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::{output, print_page};
use crate::ui;

#[derive(Serialize)]
struct AlertDeleteResponse {
    deleted: bool,
    id: i64,
}

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.ensure_admin("delete alerts")?;

    if !ui::confirm(&format!("delete alert {id}?"), flags.yes)? {
        eprintln!("aborted");
        return Ok(());
    }

    ctx.client.delete_alert(id).await?;
    tracing::info!(id, "alert deleted");
    output(&AlertDeleteResponse { deleted: true, id }, flags.format)?;

    let (snapshot, pager) = super::list::fetch(None, None, ctx).await?;
    print_page(&snapshot, &pager, flags.format)
}
