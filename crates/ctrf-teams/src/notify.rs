use reqwest::StatusCode;
use thiserror::Error;

use crate::formatter::MessageCard;

pub const WEBHOOK_ENV: &str = "TEAMS_WEBHOOK_URL";

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("TEAMS_WEBHOOK_URL is not defined in the environment variables")]
    MissingWebhookUrl,
    #[error("Failed to send message, status code: {status}, response: {body}")]
    Delivery { status: u16, body: String },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Resolve the webhook URL: explicit override first, environment second.
fn webhook_url(url_override: Option<&str>) -> Result<String, NotifyError> {
    match url_override {
        Some(url) => Ok(url.to_string()),
        None => std::env::var(WEBHOOK_ENV).map_err(|_| NotifyError::MissingWebhookUrl),
    }
}

/// POST a card to the Teams webhook. Resolves only on HTTP 200; any other
/// status rejects with the code and response body. No retries.
pub async fn send_message(
    card: &MessageCard,
    url_override: Option<&str>,
) -> Result<(), NotifyError> {
    let url = webhook_url(url_override)?;
    log::debug!("posting '{}' card to webhook", card.summary);

    let response = reqwest::Client::new().post(&url).json(card).send().await?;
    let status = response.status();
    if status == StatusCode::OK {
        return Ok(());
    }

    let body = response.text().await.unwrap_or_default();
    Err(NotifyError::Delivery {
        status: status.as_u16(),
        body,
    })
}
