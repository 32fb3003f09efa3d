mod browse;
mod create;
mod delete;
mod get;
mod import;
pub mod list;
mod set_quantity;
pub mod template;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ItemCommands;
use crate::context::AppContext;

/// Handle `stk item <subcommand>`.
pub async fn handle(
    action: &ItemCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ItemCommands::List { page, search } => list::run(*page, search.as_deref(), ctx, flags).await,
        ItemCommands::Get { id } => get::run(*id, ctx, flags).await,
        ItemCommands::Create {
            title,
            description,
            price,
            quantity,
            category,
        } => {
            create::run(
                title,
                description.as_deref(),
                *price,
                *quantity,
                category,
                ctx,
                flags,
            )
            .await
        }
        ItemCommands::Update {
            id,
            title,
            description,
            price,
            category,
        } => {
            update::run(
                *id,
                title.clone(),
                description.clone(),
                *price,
                category.clone(),
                ctx,
                flags,
            )
            .await
        }
        ItemCommands::SetQuantity { id, quantity } => {
            set_quantity::run(*id, *quantity, ctx, flags).await
        }
        ItemCommands::Delete { id } => delete::run(*id, ctx, flags).await,
        ItemCommands::Import(args) => import::run(args, ctx, flags).await,
        ItemCommands::Template { path } => template::run(path, flags),
        ItemCommands::Browse { search } => browse::run(search.as_deref(), ctx, flags).await,
    }
}
