use std::fs::File;

use anyhow::Context as _;
use serde::Serialize;

use crate::cli::subcommands::item::ImportArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{output, print_page, render};

const PREVIEW_ROWS: usize = 5;

#[derive(Serialize)]
struct ImportResponse {
    rows_parsed: usize,
    imported: usize,
    dry_run: bool,
}

pub async fn run(args: &ImportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.ensure_admin("bulk-import items")?;

    let file = File::open(&args.file)
        .with_context(|| format!("cannot open {}", args.file.display()))?;
    let batch = stock_import::parse(file)?;
    if batch.is_empty() {
        anyhow::bail!("{} contains no importable rows", args.file.display());
    }

    if !flags.quiet {
        let preview = batch.preview(PREVIEW_ROWS);
        eprintln!("previewing {} of {} rows:", preview.len(), batch.len());
        eprintln!("{}", render(&preview, OutputFormat::Table)?);
    }

    if args.dry_run {
        return output(
            &ImportResponse {
                rows_parsed: batch.len(),
                imported: 0,
                dry_run: true,
            },
            flags.format,
        );
    }

    // One call carries the whole batch; partial-failure semantics are the
    // backend's to define, nothing is split or retried here.
    let created = ctx.client.bulk_create_items(batch.rows()).await?;
    tracing::info!(imported = created.len(), "bulk import submitted");
    output(
        &ImportResponse {
            rows_parsed: batch.len(),
            imported: created.len(),
            dry_run: false,
        },
        flags.format,
    )?;

    let (snapshot, pager) = super::list::fetch(None, None, ctx).await?;
    print_page(&snapshot, &pager, flags.format)
}
