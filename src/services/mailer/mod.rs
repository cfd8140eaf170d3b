pub mod templates;
pub mod transport;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::mail::{EmailDetails, ExamFeedbackContext, ExerciseFeedbackContext};

pub use transport::HttpMailTransport;

/// 邮件传输抽象：`send(收件人, {subject, text, html})`，失败时上抛
#[async_trait::async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, to: &str, options: &crate::models::mail::EmailOptions) -> Result<()>;
}

/// 渲染反馈邮件并经传输层发送，返回完整的发送明细
pub struct Mailer {
    transport: Arc<dyn MailTransport>,
}

impl Mailer {
    pub fn new(transport: Arc<dyn MailTransport>) -> Self {
        Self { transport }
    }

    /// 发送练习反馈邮件
    pub async fn send_exercise_feedback(
        &self,
        context: &ExerciseFeedbackContext,
        to: &str,
    ) -> Result<EmailDetails> {
        let options = templates::exercise_feedback(context);
        self.transport.send(to, &options).await?;
        Ok(EmailDetails {
            to: to.to_string(),
            options,
        })
    }

    /// 发送考试反馈邮件
    pub async fn send_exam_feedback(
        &self,
        context: &ExamFeedbackContext,
        to: &str,
    ) -> Result<EmailDetails> {
        let options = templates::exam_feedback(context);
        self.transport.send(to, &options).await?;
        Ok(EmailDetails {
            to: to.to_string(),
            options,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FeedbackError;
    use crate::models::mail::EmailOptions;
    use std::sync::Mutex;

    /// 记录发送调用的桩传输，可切换为失败
    struct TransportStub {
        pub sent: Mutex<Vec<(String, EmailOptions)>>,
        pub fail: bool,
    }

    impl TransportStub {
        fn working() -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail: true,
            }
        }
    }

    #[async_trait::async_trait]
    impl MailTransport for TransportStub {
        async fn send(&self, to: &str, options: &EmailOptions) -> Result<()> {
            if self.fail {
                return Err(FeedbackError::mail_transport("stub transport failure"));
            }
            self.sent
                .lock()
                .unwrap()
                .push((to.to_string(), options.clone()));
            Ok(())
        }
    }

    fn exercise_context() -> ExerciseFeedbackContext {
        ExerciseFeedbackContext {
            exercise: "TDD".to_string(),
            group: "4".to_string(),
            grader: "Docente 1".to_string(),
            grade: "8".to_string(),
            corrections: "Muy bien".to_string(),
        }
    }

    #[tokio::test]
    async fn test_send_exercise_feedback_returns_details() {
        let transport = Arc::new(TransportStub::working());
        let mailer = Mailer::new(transport.clone());

        let details = mailer
            .send_exercise_feedback(&exercise_context(), "grupo4@example.com")
            .await
            .unwrap();

        assert_eq!(details.to, "grupo4@example.com");
        assert!(details.options.subject.contains("TDD"));

        let sent = transport.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "grupo4@example.com");
        assert_eq!(sent[0].1, details.options);
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let mailer = Mailer::new(Arc::new(TransportStub::failing()));

        let err = mailer
            .send_exercise_feedback(&exercise_context(), "grupo4@example.com")
            .await
            .unwrap_err();
        assert!(!err.is_bad_request());
    }
}
