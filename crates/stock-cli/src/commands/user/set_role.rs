use stock_core::enums::Role;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::{output, print_page};

pub async fn run(
    id: i64,
    role: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let role: Role = parse_enum(role, "role")?;

    if ctx.session.user().is_some_and(|user| user.id == id) {
        anyhow::bail!("cannot change the signed-in account's own role");
    }

    let updated = ctx.client.set_user_role(id, role).await?;
    tracing::info!(id = updated.id, role = %updated.role, "role changed");
    output(&updated, flags.format)?;

    let (snapshot, pager) = super::list::fetch(None, ctx).await?;
    print_page(&snapshot, &pager, flags.format)
}
