use chrono::Utc;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    state: String,
    email: Option<String>,
    role: Option<String>,
    token_source: Option<String>,
    expires_in_secs: Option<i64>,
}

pub async fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if ctx.session.has_token() {
        // Failure here (including a rejected token) already transitions the
        // session to anonymous; status just reports whatever remains.
        if let Err(error) = ctx.session.resolve_identity(&mut ctx.client).await {
            tracing::warn!(%error, "identity fetch failed");
        }
    }

    output(
        &AuthStatusResponse {
            state: ctx.session.state().to_string(),
            email: ctx.session.email().map(str::to_string),
            role: ctx.session.role().map(|role| role.to_string()),
            token_source: ctx.session.token_source().map(|source| source.to_string()),
            expires_in_secs: ctx.session.remaining_secs(Utc::now()),
        },
        flags.format,
    )
}
