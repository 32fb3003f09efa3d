use std::time::{Duration, Instant};

use stock_core::debounce::Debouncer;
use stock_core::page::Pager;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::print_page;

const HELP: &str = "n next, p prev, g N go to page, /text search, c clear search, q quit";

/// One parsed line of browse input.
#[derive(Debug, Clone, PartialEq, Eq)]
enum BrowseInput {
    Next,
    Prev,
    Goto(u32),
    Search(String),
    ClearSearch,
    Quit,
    Unknown,
}

impl BrowseInput {
    fn parse(line: &str) -> Self {
        let line = line.trim();
        if let Some(text) = line.strip_prefix('/') {
            return Self::Search(text.trim().to_string());
        }
        match line {
            "n" => Self::Next,
            "p" => Self::Prev,
            "c" => Self::ClearSearch,
            "q" => Self::Quit,
            _ => line
                .strip_prefix('g')
                .and_then(|raw| raw.trim().parse().ok())
                .map_or(Self::Unknown, Self::Goto),
        }
    }
}

/// Interactive paginated item table.
///
/// Page moves refetch immediately; search input goes through the debouncer,
/// so the fetch only fires once typing has settled, and a filter change
/// always resets to page 1. One fetch is in flight at a time — the loop
/// awaits each response before reading further input.
pub async fn run(
    initial: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut pager = ctx.pager(None);
    let mut search: Option<String> = initial.map(str::to_string);
    let mut debouncer = Debouncer::new(Duration::from_millis(ctx.config.ui.search_debounce_ms));

    eprintln!("{HELP}");
    show(&mut pager, search.as_deref(), ctx, flags).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let deadline = debouncer.deadline();
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match BrowseInput::parse(&line) {
                    BrowseInput::Quit => break,
                    BrowseInput::Next => {
                        if pager.next() {
                            show(&mut pager, search.as_deref(), ctx, flags).await?;
                        } else {
                            eprintln!("already on the last page");
                        }
                    }
                    BrowseInput::Prev => {
                        if pager.prev() {
                            show(&mut pager, search.as_deref(), ctx, flags).await?;
                        } else {
                            eprintln!("already on the first page");
                        }
                    }
                    BrowseInput::Goto(n) => {
                        if pager.goto(n) {
                            show(&mut pager, search.as_deref(), ctx, flags).await?;
                        } else {
                            eprintln!("page {n} is out of range");
                        }
                    }
                    BrowseInput::Search(text) => debouncer.submit(text, Instant::now()),
                    BrowseInput::ClearSearch => debouncer.submit(String::new(), Instant::now()),
                    BrowseInput::Unknown => eprintln!("{HELP}"),
                }
            }
            () = sleep_until(deadline), if deadline.is_some() => {
                if let Some(text) = debouncer.poll(Instant::now()) {
                    search = (!text.is_empty()).then_some(text);
                    pager.reset_for_filter_change();
                    show(&mut pager, search.as_deref(), ctx, flags).await?;
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    Ok(())
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => {
            tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await;
        }
        None => std::future::pending().await,
    }
}

/// Fetch and render the current page. A failed fetch is the page-local
/// banner: reported once, the view stays up — except a rejected token, which
/// must propagate so the session is cleared.
async fn show(
    pager: &mut Pager,
    search: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match ctx.client.list_items(pager.query(), search).await {
        Ok(snapshot) => {
            pager.apply(&snapshot);
            if let Some(search) = search {
                eprintln!("filter: {search}");
            }
            print_page(&snapshot, pager, flags.format)
        }
        Err(error) if error.is_unauthorized() => Err(error.into()),
        Err(error) => {
            eprintln!("fetch failed: {error}");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::BrowseInput;

    #[test]
    fn page_moves_parse() {
        assert_eq!(BrowseInput::parse("n"), BrowseInput::Next);
        assert_eq!(BrowseInput::parse(" p "), BrowseInput::Prev);
        assert_eq!(BrowseInput::parse("g 4"), BrowseInput::Goto(4));
        assert_eq!(BrowseInput::parse("g12"), BrowseInput::Goto(12));
        assert_eq!(BrowseInput::parse("q"), BrowseInput::Quit);
    }

    #[test]
    fn search_takes_the_rest_of_the_line() {
        assert_eq!(
            BrowseInput::parse("/m6 bolt"),
            BrowseInput::Search("m6 bolt".into())
        );
        assert_eq!(BrowseInput::parse("/"), BrowseInput::Search(String::new()));
        assert_eq!(BrowseInput::parse("c"), BrowseInput::ClearSearch);
    }

    #[test]
    fn junk_is_unknown_not_a_crash() {
        assert_eq!(BrowseInput::parse("next"), BrowseInput::Unknown);
        assert_eq!(BrowseInput::parse("g x"), BrowseInput::Unknown);
        assert_eq!(BrowseInput::parse(""), BrowseInput::Unknown);
    }
}
