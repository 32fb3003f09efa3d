use std::io::Write as _;
use std::time::Duration;

use chrono::Utc;

use crate::cli::GlobalFlags;
use crate::context::AppContext;

/// What the per-second tick should do with the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Countdown {
    /// Token lifetime reached zero: log out and end the loop.
    Expired,
    /// Seconds left on the token.
    Remaining(i64),
    /// No decodable expiry claim; nothing to count.
    Unknown,
}

/// Live view of the navigation shell: the active-alert count refreshed every
/// poll interval and the token-expiry countdown ticking every second, as two
/// independent timers. Hitting zero logs out exactly once and ends the loop;
/// Ctrl-C tears both timers down. Neither timer outlives the command.
pub async fn run(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut poll = tokio::time::interval(Duration::from_secs(ctx.config.ui.alert_poll_secs));
    let mut tick = tokio::time::interval(Duration::from_secs(1));

    eprintln!("watching alerts every {}s (Ctrl-C to stop)", ctx.config.ui.alert_poll_secs);
    loop {
        tokio::select! {
            _ = poll.tick() => {
                match ctx.client.active_alert_count().await {
                    Ok(count) => {
                        println!("{} active alerts: {count}", Utc::now().format("%H:%M:%S"));
                    }
                    // Surfaced once, never retried; the next interval tick is
                    // a fresh scheduled poll.
                    Err(error) => eprintln!("alert poll failed: {error}"),
                }
            }
            _ = tick.tick() => {
                match countdown(ctx) {
                    Countdown::Expired => {
                        ctx.logout();
                        eprintln!();
                        eprintln!("session expired — stored credentials cleared");
                        break;
                    }
                    Countdown::Remaining(secs) => {
                        if !flags.quiet {
                            eprint!("\rtoken expires in {} ", format_remaining(secs));
                            let _ = std::io::stderr().flush();
                        }
                    }
                    Countdown::Unknown => {}
                }
            }
            _ = tokio::signal::ctrl_c() => {
                eprintln!();
                break;
            }
        }
    }

    Ok(())
}

fn countdown(ctx: &AppContext) -> Countdown {
    match ctx.session.remaining_secs(Utc::now()) {
        Some(0) => Countdown::Expired,
        Some(secs) => Countdown::Remaining(secs),
        None => Countdown::Unknown,
    }
}

fn format_remaining(secs: i64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
