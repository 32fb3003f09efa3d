use stock_core::entities::NewUser;
use stock_core::enums::Role;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::{output, print_page};

pub async fn run(
    email: &str,
    password: &str,
    role: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let role: Role = parse_enum(role, "role")?;

    let created = ctx
        .client
        .create_user(&NewUser {
            email: email.to_string(),
            password: password.to_string(),
            role,
        })
        .await?;
    tracing::info!(id = created.id, role = %created.role, "user created");
    output(&created, flags.format)?;

    let (snapshot, pager) = super::list::fetch(None, ctx).await?;
    print_page(&snapshot, &pager, flags.format)
}
