use serde::Serialize;

use crate::ctrf::{Environment, Report, Test, TestStatus};

const PLUGIN_FOOTER: &str = "[A CTRF plugin](https://github.com/ctrf-io/teams-ctrf)";
const NO_BUILD_INFO: &str = "No build information provided";

pub const COLOR_FAILED: &str = "FF0000";
pub const COLOR_PASSED: &str = "36a64f";
pub const COLOR_FLAKY: &str = "#FFA500";

/// Teams "MessageCard" webhook payload.
#[derive(Debug, Serialize)]
pub struct MessageCard {
    #[serde(rename = "@type")]
    pub card_type: &'static str,
    #[serde(rename = "@context")]
    pub context: &'static str,
    pub summary: String,
    #[serde(rename = "themeColor")]
    pub theme_color: String,
    pub sections: Vec<Section>,
}

impl MessageCard {
    fn new(summary: &str, theme_color: &str, sections: Vec<Section>) -> Self {
        Self {
            card_type: "MessageCard",
            context: "http://schema.org/extensions",
            summary: summary.to_string(),
            theme_color: theme_color.to_string(),
            sections,
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct Section {
    #[serde(rename = "activityTitle", skip_serializing_if = "Option::is_none")]
    pub activity_title: Option<String>,
    #[serde(rename = "activitySubtitle", skip_serializing_if = "Option::is_none")]
    pub activity_subtitle: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub facts: Vec<Fact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub markdown: bool,
}

#[derive(Debug, Serialize)]
pub struct Fact {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Fact {
    fn new(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            value: Some(value.into()),
        }
    }

    fn header(name: &str) -> Self {
        Self {
            name: name.to_string(),
            value: None,
        }
    }
}

/// Build-info display string plus the environment properties that are absent.
/// With no environment at all, every property counts as missing.
fn build_info(environment: Option<&Environment>) -> (String, Vec<&'static str>) {
    let Some(env) = environment else {
        return (
            NO_BUILD_INFO.to_string(),
            vec!["buildName", "buildNumber", "buildUrl"],
        );
    };

    let info = match (&env.build_name, &env.build_number) {
        (Some(name), Some(number)) => match &env.build_url {
            Some(url) => format!("[{name} #{number}]({url})"),
            None => format!("{name} #{number}"),
        },
        (None, None) => NO_BUILD_INFO.to_string(),
        (name, number) => format!(
            "{} {}",
            name.as_deref().unwrap_or(""),
            number.as_deref().unwrap_or("")
        ),
    };

    let mut missing = Vec::new();
    if env.build_name.is_none() {
        missing.push("buildName");
    }
    if env.build_number.is_none() {
        missing.push("buildNumber");
    }
    if env.build_url.is_none() {
        missing.push("buildUrl");
    }

    (info, missing)
}

/// Elapsed run time: "<1s" under one second, otherwise zero-padded HH:MM:SS.
fn format_duration(start: u64, stop: u64) -> String {
    let elapsed_ms = stop.saturating_sub(start);
    if elapsed_ms < 1000 {
        return "<1s".to_string();
    }
    let secs = elapsed_ms / 1000;
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

/// Missing-properties warning (when applicable) and the plugin footer, shared
/// by every card variant.
fn trailer_sections(missing: &[&'static str], sections: &mut Vec<Section>) {
    if !missing.is_empty() {
        sections.push(Section {
            activity_subtitle: Some(format!(
                "&#x26A0; Missing environment properties: {}. \
                 Add these to your CTRF report for a better experience.",
                missing.join(", ")
            )),
            markdown: true,
            ..Default::default()
        });
    }
    sections.push(Section {
        text: Some(PLUGIN_FOOTER.to_string()),
        markdown: true,
        ..Default::default()
    });
}

/// Full results summary card.
pub fn results_message(report: &Report) -> MessageCard {
    let summary = &report.results.summary;
    let title = "CTRF Test Results";

    let (info, missing) = build_info(report.results.environment.as_ref());

    let color = if summary.failed > 0 {
        COLOR_FAILED
    } else {
        COLOR_PASSED
    };
    let result_text = if summary.failed > 0 {
        format!("{} failed tests", summary.failed)
    } else {
        "Passed".to_string()
    };

    let test_summary = format!(
        "&#x2705; {} | &#x274C; {} | &#x23E9; {} | &#x23F3; {} | &#x2753; {}",
        summary.passed, summary.failed, summary.skipped, summary.pending, summary.other
    );

    let mut sections = vec![Section {
        activity_title: Some(title.to_string()),
        facts: vec![
            Fact::new("Test Summary", test_summary),
            Fact::new("Results", result_text),
            Fact::new("Duration", format_duration(summary.start, summary.stop)),
            Fact::new("Build", info),
        ],
        markdown: true,
        ..Default::default()
    }];
    trailer_sections(&missing, &mut sections);

    MessageCard::new(title, color, sections)
}

/// Flaky-tests card, or `None` when no test is flagged flaky.
pub fn flaky_message(report: &Report) -> Option<MessageCard> {
    let flaky: Vec<&Test> = report.results.tests.iter().filter(|t| t.flaky).collect();
    if flaky.is_empty() {
        return None;
    }

    let title = "Flaky Test Report";
    let (info, missing) = build_info(report.results.environment.as_ref());

    let bullets = flaky
        .iter()
        .map(|t| format!("- {}", t.name))
        .collect::<Vec<_>>()
        .join("\n");

    let mut sections = vec![Section {
        activity_title: Some(title.to_string()),
        facts: vec![
            Fact::header("&#x1F342; Flaky Tests Detected"),
            Fact::new("Flaky Tests", bullets),
            Fact::new("Build", info),
        ],
        markdown: true,
        ..Default::default()
    }];
    trailer_sections(&missing, &mut sections);

    Some(MessageCard::new(title, COLOR_FLAKY, sections))
}

/// Per-test AI failure summary card, or `None` when the test carries no
/// summary.
pub fn ai_summary_message(test: &Test, environment: Option<&Environment>) -> Option<MessageCard> {
    let ai = test.ai.as_deref()?;

    let title = "AI Test Summary";
    let (info, missing) = build_info(environment);

    let mut sections = vec![Section {
        activity_title: Some(title.to_string()),
        facts: vec![
            Fact::new("Test Name", test.name.clone()),
            Fact::new("Status", "Failed"),
            Fact::new("&#x2728; AI Summary", ai),
            Fact::new("Build", info),
        ],
        markdown: true,
        ..Default::default()
    }];
    trailer_sections(&missing, &mut sections);

    Some(MessageCard::new(title, COLOR_FAILED, sections))
}

/// Plain-text digest of failed tests. Never delivered to a webhook.
pub fn failed_tests_digest(report: &Report) -> String {
    let failed: Vec<&Test> = report
        .results
        .tests
        .iter()
        .filter(|t| t.status == TestStatus::Failed)
        .collect();
    if failed.is_empty() {
        return "No failed tests.".to_string();
    }

    let body = failed
        .iter()
        .map(|t| {
            format!(
                "Test: {}\nMessage: {}\n",
                t.name,
                t.message.as_deref().unwrap_or("No message provided")
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!("Failed Tests:\n{body}")
}
