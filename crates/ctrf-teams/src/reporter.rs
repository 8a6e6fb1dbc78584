use anyhow::Result;

use crate::ctrf::{Report, TestStatus};
use crate::formatter::{ai_summary_message, flaky_message, results_message};
use crate::notify::send_message;

/// Programmatic options for test-framework integrations. The webhook URL
/// passed here takes precedence over the `TEAMS_WEBHOOK_URL` environment
/// variable.
#[derive(Debug, Default, Clone)]
pub struct Options {
    pub webhook_url: Option<String>,
    pub on_fail_only: bool,
}

/// Send the results summary card. Skips delivery when `on_fail_only` is set
/// and the report has no failures.
pub async fn send_results(report: &Report, options: &Options) -> Result<()> {
    if options.on_fail_only && report.results.summary.failed == 0 {
        println!("No failed tests. Message not sent.");
        return Ok(());
    }

    let card = results_message(report);
    send_message(&card, options.webhook_url.as_deref()).await?;
    println!("Test results message sent to Teams.");
    Ok(())
}

/// Send the flaky-tests card, or report that no test was flagged flaky.
pub async fn send_flaky(report: &Report, options: &Options) -> Result<()> {
    match flaky_message(report) {
        Some(card) => {
            send_message(&card, options.webhook_url.as_deref()).await?;
            println!("Flaky tests message sent to Teams.");
        }
        None => println!("No flaky tests detected. No message sent."),
    }
    Ok(())
}

/// Send one AI summary card per failed test that carries a summary, strictly
/// in report order.
pub async fn send_ai_summaries(report: &Report, options: &Options) -> Result<()> {
    for test in &report.results.tests {
        if test.status != TestStatus::Failed {
            continue;
        }
        if let Some(card) = ai_summary_message(test, report.results.environment.as_ref()) {
            send_message(&card, options.webhook_url.as_deref()).await?;
            println!("AI summary message sent to Teams for {}.", test.name);
        }
    }
    Ok(())
}
