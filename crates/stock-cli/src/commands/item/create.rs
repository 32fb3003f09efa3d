use stock_core::entities::NewItem;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::{output, print_page};

pub async fn run(
    title: &str,
    description: Option<&str>,
    price: i64,
    quantity: i64,
    category: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.ensure_admin("create items")?;

    let created = ctx
        .client
        .create_item(&NewItem {
            title: title.to_string(),
            description: description.map(str::to_string),
            price,
            quantity,
            category: category.to_string(),
        })
        .await?;
    tracing::info!(id = created.id, "item created");
    output(&created, flags.format)?;

    // Trust the server's snapshot rather than patching the local view.
    let (snapshot, pager) = super::list::fetch(None, None, ctx).await?;
    print_page(&snapshot, &pager, flags.format)
}
