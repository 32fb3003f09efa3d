use std::path::Path;

use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize)]
struct TemplateResponse {
    written: String,
}

/// Pure local serialization; works logged out, so dispatch skips the guard.
pub fn run(path: &Path, flags: &GlobalFlags) -> anyhow::Result<()> {
    stock_import::write_template(path)?;
    output(
        &TemplateResponse {
            written: path.display().to_string(),
        },
        flags.format,
    )
}
