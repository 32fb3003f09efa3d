use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLogoutResponse {
    logged_out: bool,
}

/// Logout never fails: storage trouble is logged, state is cleared anyway.
pub fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.logout();
    output(&AuthLogoutResponse { logged_out: true }, flags.format)
}
