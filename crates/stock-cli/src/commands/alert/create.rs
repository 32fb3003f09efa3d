use stock_core::entities::NewAlert;
use stock_core::enums::AlertType;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::{output, print_page};

/// Console-created alerts are always manual; `low_stock`/`out_of_stock` are
/// raised by the backend's monitors only.
pub async fn run(
    message: &str,
    item: Option<i64>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.ensure_manager("create alerts")?;
    if message.trim().is_empty() {
        anyhow::bail!("alert message must not be empty");
    }

    let created = ctx
        .client
        .create_alert(&NewAlert {
            item_id: item,
            alert_type: AlertType::Manual,
            message: message.to_string(),
        })
        .await?;
    tracing::info!(id = created.id, "alert created");
    output(&created, flags.format)?;

    let (snapshot, pager) = super::list::fetch(None, None, ctx).await?;
    print_page(&snapshot, &pager, flags.format)
}
