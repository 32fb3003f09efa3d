use stock_core::entities::User;
use stock_core::page::{Page, Pager};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::print_page;

pub async fn run(page: Option<u32>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (snapshot, pager) = fetch(page, ctx).await?;
    print_page(&snapshot, &pager, flags.format)
}

/// Fetch one page of accounts; mutating user commands reuse this for their
/// post-write refresh.
pub(crate) async fn fetch(
    page: Option<u32>,
    ctx: &AppContext,
) -> anyhow::Result<(Page<User>, Pager)> {
    let mut pager = ctx.pager(page);
    let snapshot = ctx.client.list_users(pager.query()).await?;
    pager.apply(&snapshot);
    Ok((snapshot, pager))
}
