use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::{output, print_page};

/// The narrow quantity-only path: open to managers, unlike full edit.
pub async fn run(
    id: i64,
    quantity: i64,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.ensure_manager("adjust quantity")?;
    if quantity < 0 {
        anyhow::bail!("quantity cannot be negative");
    }

    let updated = ctx.client.update_quantity(id, quantity).await?;
    tracing::info!(id = updated.id, quantity = updated.quantity, "quantity set");
    output(&updated, flags.format)?;

    let (snapshot, pager) = super::list::fetch(None, None, ctx).await?;
    print_page(&snapshot, &pager, flags.format)
}
