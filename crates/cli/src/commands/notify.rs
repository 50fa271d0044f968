//! Notify command: send a test notification through the configured webhook.

use anyhow::Result;
use tracing::info;

use svcutil_config::Config;
use svcutil_config::constants::NO_VALUE_FOUND;
use svcutil_service::{NotificationService, ServiceError};

const WEBHOOK_KEY: &str = "SLACK_APIKEY";

pub async fn run(config: &Config, title: &str, message: &str, link: Option<&str>) -> Result<()> {
    let webhook = config.get_value(WEBHOOK_KEY);
    if webhook == NO_VALUE_FOUND || webhook.is_empty() {
        return Err(ServiceError::NotConfigured {
            key: WEBHOOK_KEY.to_string(),
        }
        .into());
    }

    let service = NotificationService::new(webhook, config.api_config().title.clone())?;
    let response = service.success(title, message, link).await?;

    info!(title, "notification sent");
    println!("sent notification: {title}");
    if !response.is_empty() {
        println!("webhook response: {response}");
    }

    Ok(())
}
