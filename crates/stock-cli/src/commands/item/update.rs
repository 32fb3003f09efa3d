use stock_core::entities::UpdateItem;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::{output, print_page};

pub async fn run(
    id: i64,
    title: Option<String>,
    description: Option<String>,
    price: Option<i64>,
    category: Option<String>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.ensure_admin("edit items")?;

    let update = UpdateItem {
        title,
        description,
        price,
        category,
    };
    if update.is_empty() {
        anyhow::bail!(
            "nothing to update: pass at least one of --title, --description, --price, --category"
        );
    }

    let updated = ctx.client.update_item(id, &update).await?;
    tracing::info!(id = updated.id, "item updated");
    output(&updated, flags.format)?;

    let (snapshot, pager) = super::list::fetch(None, None, ctx).await?;
    print_page(&snapshot, &pager, flags.format)
}
