use stock_core::entities::Alert;
use stock_core::enums::AlertStatus;
use stock_core::page::{Page, Pager};

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::print_page;

pub async fn run(
    page: Option<u32>,
    status: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let status = status
        .map(|raw| parse_enum::<AlertStatus>(raw, "status"))
        .transpose()?;
    let (snapshot, pager) = fetch(page, status, ctx).await?;
    print_page(&snapshot, &pager, flags.format)
}

/// Fetch one page of alerts; mutating alert commands reuse this (unfiltered)
/// for their post-write refresh.
pub(crate) async fn fetch(
    page: Option<u32>,
    status: Option<AlertStatus>,
    ctx: &AppContext,
) -> anyhow::Result<(Page<Alert>, Pager)> {
    let mut pager = ctx.pager(page);
    let snapshot = ctx.client.list_alerts(pager.query(), status).await?;
    pager.apply(&snapshot);
    Ok((snapshot, pager))
}
