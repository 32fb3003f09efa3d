use chrono::Utc;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::ui;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    email: String,
    role: String,
    expires_in_secs: Option<i64>,
}

pub async fn handle(
    args: &AuthLoginArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let password = match &args.password {
        Some(password) => password.clone(),
        None => ui::prompt_line("Password: ")?,
    };

    ctx.session
        .login(&mut ctx.client, &args.email, &password)
        .await?;

    let user = ctx
        .session
        .user()
        .ok_or_else(|| anyhow::anyhow!("identity missing after login"))?;

    output(
        &AuthLoginResponse {
            authenticated: true,
            email: user.email.clone(),
            role: user.role.to_string(),
            expires_in_secs: ctx.session.remaining_secs(Utc::now()),
        },
        flags.format,
    )
}
