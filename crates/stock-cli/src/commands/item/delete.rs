use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::{output, print_page};
use crate::ui;

#[derive(Serialize)]
struct ItemDeleteResponse {
    deleted: bool,
    id: i64,
}

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.ensure_admin("delete items")?;

    if !ui::confirm(&format!("delete item {id}?"), flags.yes)? {
        eprintln!("aborted");
        return Ok(());
    }

    ctx.client.delete_item(id).await?;
    tracing::info!(id, "item deleted");
    output(&ItemDeleteResponse { deleted: true, id }, flags.format)?;

    let (snapshot, pager) = super::list::fetch(None, None, ctx).await?;
    print_page(&snapshot, &pager, flags.format)
}
