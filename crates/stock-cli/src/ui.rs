use std::io::{IsTerminal, Write};

/// Ask for explicit confirmation before a destructive action.
///
/// `--yes` short-circuits; otherwise a TTY is required so scripts cannot
/// stumble into deletes.
///
/// # Errors
///
/// Fails when stdin is not a terminal and `--yes` was not passed.
pub fn confirm(question: &str, assume_yes: bool) -> anyhow::Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        anyhow::bail!("confirmation required for: {question} — pass --yes in non-interactive use");
    }

    eprint!("{question} [y/N] ");
    std::io::stderr().flush()?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

/// Read one line of input with a prompt (e.g. the login password).
///
/// # Errors
///
/// I/O errors from stdin/stderr.
pub fn prompt_line(prompt: &str) -> anyhow::Result<String> {
    eprint!("{prompt}");
    std::io::stderr().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
