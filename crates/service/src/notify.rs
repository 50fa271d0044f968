//! Webhook notifications.
//!
//! Posts a JSON payload to a configured webhook (Slack-compatible). Message
//! formatting beyond title/message/link assembly is the webhook's problem.

use std::time::Duration;

use serde::Serialize;
use tracing::info;

use crate::error::{Result, ServiceError};

const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Serialize)]
struct Payload<'a> {
    username: &'a str,
    text: String,
}

/// Sends notifications to a single webhook on behalf of one application.
pub struct NotificationService {
    webhook: String,
    username: String,
    http: reqwest::Client,
}

impl NotificationService {
    /// Create a service for the given webhook URL, posting as `username`
    /// (typically the application title from `ApiConfig`).
    pub fn new(webhook: String, username: String) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            webhook,
            username,
            http,
        })
    }

    /// Send a success notification, returning the webhook's response body.
    pub async fn success(&self, title: &str, message: &str, link: Option<&str>) -> Result<String> {
        let mut text = format!("*{title}*\n{message}");
        if let Some(link) = link {
            text.push('\n');
            text.push_str(link);
        }

        let payload = Payload {
            username: &self.username,
            text,
        };

        let response = self.http.post(&self.webhook).json(&payload).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ServiceError::NotificationRejected {
                status: status.as_u16(),
                body,
            });
        }

        info!(title, "sent notification to webhook");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_success_posts_username_and_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/webhook"))
            .and(body_partial_json(serde_json::json!({
                "username": "payments-api",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&server)
            .await;

        let service = NotificationService::new(
            format!("{}/webhook", server.uri()),
            "payments-api".to_string(),
        )
        .unwrap();

        let body = service
            .success("deploy", "build 42 released", Some("https://ci.example.org/42"))
            .await
            .unwrap();
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_non_success_status_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403).set_body_string("invalid_token"))
            .mount(&server)
            .await;

        let service =
            NotificationService::new(server.uri(), "payments-api".to_string()).unwrap();

        let err = service.success("deploy", "nope", None).await.unwrap_err();
        match err {
            ServiceError::NotificationRejected { status, body } => {
                assert_eq!(status, 403);
                assert_eq!(body, "invalid_token");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
