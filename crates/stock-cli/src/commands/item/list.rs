use stock_core::entities::Item;
use stock_core::page::{Page, Pager};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::print_page;

pub async fn run(
    page: Option<u32>,
    search: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let (snapshot, pager) = fetch(page, search, ctx).await?;
    print_page(&snapshot, &pager, flags.format)
}

/// Fetch one page of items plus the pager reflecting the server's answer.
/// Mutating item commands reuse this for their post-write refresh.
pub(crate) async fn fetch(
    page: Option<u32>,
    search: Option<&str>,
    ctx: &AppContext,
) -> anyhow::Result<(Page<Item>, Pager)> {
    let mut pager = ctx.pager(page);
    let snapshot = ctx.client.list_items(pager.query(), search).await?;
    pager.apply(&snapshot);
    Ok((snapshot, pager))
}
