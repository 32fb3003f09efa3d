use serde::Serialize;
use stock_core::entities::ItemActivity;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

/// How many history points the trend column shows per item.
const TREND_POINTS: usize = 6;

#[derive(Serialize)]
struct ActivityRow {
    id: i64,
    title: String,
    quantity: i64,
    trend: String,
}

impl From<&ItemActivity> for ActivityRow {
    fn from(activity: &ItemActivity) -> Self {
        Self {
            id: activity.item_id,
            title: activity.title.clone(),
            quantity: activity.current_quantity,
            trend: trend_line(activity),
        }
    }
}

/// Handle `stk dashboard`: the summary cards plus per-item quantity trends.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let stats = ctx.client.dashboard_stats().await?;
    if flags.format != OutputFormat::Table {
        return output(&stats, flags.format);
    }

    output(&stats.summary, flags.format)?;

    if stats.item_stats.is_empty() {
        println!("no item activity recorded");
        return Ok(());
    }
    println!();
    let rows: Vec<ActivityRow> = stats.item_stats.iter().map(ActivityRow::from).collect();
    output(&rows, flags.format)
}

/// Text rendering of the quantity chart: the most recent history points,
/// oldest first.
fn trend_line(activity: &ItemActivity) -> String {
    let start = activity.history.len().saturating_sub(TREND_POINTS);
    let recent: Vec<String> = activity.history[start..]
        .iter()
        .map(|point| point.quantity.to_string())
        .collect();
    if recent.is_empty() {
        String::from("-")
    } else {
        recent.join(" > ")
    }
}
