use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::{output, print_page};
use crate::ui;

#[derive(Serialize)]
struct UserDeleteResponse {
    deleted: bool,
    id: i64,
}

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if ctx.session.user().is_some_and(|user| user.id == id) {
        anyhow::bail!("cannot delete the signed-in account");
    }

    if !ui::confirm(&format!("delete user {id}?"), flags.yes)? {
        eprintln!("aborted");
        return Ok(());
    }

    ctx.client.delete_user(id).await?;
    tracing::info!(id, "user deleted");
    output(&UserDeleteResponse { deleted: true, id }, flags.format)?;

    let (snapshot, pager) = super::list::fetch(None, ctx).await?;
    print_page(&snapshot, &pager, flags.format)
}
