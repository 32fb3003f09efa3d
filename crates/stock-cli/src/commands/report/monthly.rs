use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    month: Option<u32>,
    year: Option<i32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    validate_window(month, year)?;

    let report = ctx.client.monthly_report(month, year).await?;
    if flags.format != OutputFormat::Table {
        return output(&report, flags.format);
    }

    println!(
        "report for {:02}/{} (generated {})",
        report.month,
        report.year,
        report.report_date.format("%Y-%m-%d")
    );
    output(&report.stats, flags.format)?;

    if !report.category_breakdown.is_empty() {
        println!();
        output(&report.category_breakdown, flags.format)?;
    }
    if !report.activities.is_empty() {
        println!();
        output(&report.activities, flags.format)?;
    }
    Ok(())
}

/// Reject parameter values the backend would only answer with a 422 for.
/// Omitted values default to the current month/year server-side.
fn validate_window(month: Option<u32>, year: Option<i32>) -> anyhow::Result<()> {
    if let Some(month) = month {
        if !(1..=12).contains(&month) {
            anyhow::bail!("month must be between 1 and 12, got {month}");
        }
    }
    if let Some(year) = year {
        if !(1970..=9999).contains(&year) {
            anyhow::bail!("year must be four digits, got {year}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate_window;

    #[test]
    fn accepts_valid_and_omitted_parameters() {
        assert!(validate_window(None, None).is_ok());
        assert!(validate_window(Some(1), None).is_ok());
        assert!(validate_window(Some(12), Some(2026)).is_ok());
    }

    #[test]
    fn rejects_out_of_range_months_and_years() {
        assert!(validate_window(Some(0), None).is_err());
        assert!(validate_window(Some(13), None).is_err());
        assert!(validate_window(None, Some(12)).is_err());
        assert!(validate_window(None, Some(10_000)).is_err());
    }
}
