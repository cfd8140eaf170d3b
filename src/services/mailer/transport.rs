//! HTTP 邮件中继传输
//!
//! 把渲染好的邮件以 JSON 提交到配置的中继接口，携带 Bearer 令牌。
//! 发送失败原样上抛，不做重试。

use serde_json::json;
use tracing::debug;

use crate::config::MailerConfig;
use crate::errors::{FeedbackError, Result};
use crate::models::mail::EmailOptions;

use super::MailTransport;

pub struct HttpMailTransport {
    http: reqwest::Client,
    api_url: String,
    token: String,
    from: String,
    reply_to: String,
}

impl HttpMailTransport {
    pub fn from_config(config: &MailerConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: config.api_url.clone(),
            token: config.token.clone(),
            from: config.from.clone(),
            reply_to: config.reply_to.clone(),
        }
    }
}

#[async_trait::async_trait]
impl MailTransport for HttpMailTransport {
    async fn send(&self, to: &str, options: &EmailOptions) -> Result<()> {
        let body = json!({
            "from": self.from,
            "reply_to": self.reply_to,
            "to": to,
            "subject": options.subject,
            "text": options.text,
            "html": options.html,
        });

        debug!(to, subject = %options.subject, "sending mail through relay");
        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .map_err(|e| FeedbackError::mail_transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FeedbackError::mail_transport(format!(
                "relay returned {status}: {body}"
            )));
        }
        Ok(())
    }
}
