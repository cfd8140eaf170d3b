//! API 门面
//!
//! 每个处理函数：用请求解析器取必填字段（缺失 -> 400，消息带缺失
//! 路径和原始载荷），调用领域操作（任何错误 -> 500，通用消息），
//! 成功 -> 200，消息体为序列化结果。

pub mod assignments;
pub mod feedbacks;
pub mod mail;
pub mod pages;

use std::sync::Arc;

use serde_json::Value;
use tracing::error;

use crate::config::AppConfig;
use crate::errors::{FeedbackError, Result};
use crate::models::Response;
use crate::services::assigner::Assigner;
use crate::services::mailer::{HttpMailTransport, Mailer};
use crate::storage::notion_storage::NotionRepositoryFactory;
use crate::storage::notion_storage::client::NotionClient;

/// 页面内容读取的接缝，令牌随请求到达
#[async_trait::async_trait]
pub trait PageReader: Send + Sync {
    async fn page_content(&self, token: &str, page_id: &str) -> Result<String>;
}

pub struct NotionPageReader;

#[async_trait::async_trait]
impl PageReader for NotionPageReader {
    async fn page_content(&self, token: &str, page_id: &str) -> Result<String> {
        // 每次请求用新凭据构造客户端，不跨请求共享状态
        NotionClient::new(token).page_content(page_id).await
    }
}

pub struct Api {
    pub(crate) mailer: Mailer,
    pub(crate) assigner: Assigner,
    pub(crate) pages: Arc<dyn PageReader>,
    pub(crate) teachers_email: String,
}

impl Api {
    pub fn new(
        mailer: Mailer,
        assigner: Assigner,
        pages: Arc<dyn PageReader>,
        teachers_email: impl Into<String>,
    ) -> Self {
        Self {
            mailer,
            assigner,
            pages,
            teachers_email: teachers_email.into(),
        }
    }

    /// 按全局配置装配生产实现
    pub fn from_app_config() -> Self {
        let config = AppConfig::get();
        Self::new(
            Mailer::new(Arc::new(HttpMailTransport::from_config(&config.mailer))),
            Assigner::new(Arc::new(NotionRepositoryFactory)),
            Arc::new(NotionPageReader),
            config.mailer.teachers_email.clone(),
        )
    }

    pub async fn send_exercise_feedback_handler(&self, payload: Value) -> Response {
        mail::send_exercise_feedback(self, payload).await
    }

    pub async fn send_exam_feedback_handler(&self, payload: Value) -> Response {
        mail::send_exam_feedback(self, payload).await
    }

    pub async fn assign_exercise_handler(&self, payload: Value) -> Response {
        assignments::assign_exercise(self, payload).await
    }

    pub async fn assign_exam_handler(&self, payload: Value) -> Response {
        assignments::assign_exam(self, payload).await
    }

    pub async fn get_exercise_feedbacks_handler(&self, payload: Value) -> Response {
        feedbacks::get_exercise_feedbacks(self, payload).await
    }

    pub async fn get_exam_feedbacks_handler(&self, payload: Value) -> Response {
        feedbacks::get_exam_feedbacks(self, payload).await
    }

    pub async fn get_content_from_page_handler(&self, payload: Value) -> Response {
        pages::get_content_from_page(self, payload).await
    }

    pub async fn get_teachers_emails_handler(&self, payload: Value) -> Response {
        pages::get_teachers_emails(self, payload).await
    }
}

/// 统一的错误到响应映射：缺失字段 400，其余 500（通用消息）
pub(super) fn error_response(err: FeedbackError) -> Response {
    if err.is_bad_request() {
        Response::bad_request(err.message())
    } else {
        error!(code = err.code(), "handler failed: {}", err.format_simple());
        Response::internal_error("Internal server error")
    }
}

pub(super) fn respond(result: Result<String>) -> Response {
    match result {
        Ok(message) => Response::ok(message),
        Err(err) => error_response(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::feedbacks::{Exercise, Feedback, Identified, NotionConfig, Teacher};
    use crate::models::mail::EmailOptions;
    use crate::services::mailer::MailTransport;
    use crate::storage::{Repository, RepositoryFactory};
    use serde_json::json;

    struct TransportStub {
        fail: bool,
    }

    #[async_trait::async_trait]
    impl MailTransport for TransportStub {
        async fn send(&self, _to: &str, _options: &EmailOptions) -> Result<()> {
            if self.fail {
                Err(FeedbackError::mail_transport("stub transport failure"))
            } else {
                Ok(())
            }
        }
    }

    struct RepositoryStub {
        exercises: Vec<Identified<Exercise>>,
        feedbacks: Vec<Identified<Feedback>>,
        fail: bool,
    }

    #[async_trait::async_trait]
    impl Repository for RepositoryStub {
        async fn get_exercises_from(
            &self,
            _assignments: &[crate::models::feedbacks::Assignment],
        ) -> Result<Vec<Identified<Exercise>>> {
            self.check()?;
            Ok(self.exercises.clone())
        }

        async fn get_teachers_from(
            &self,
            _assignments: &[crate::models::feedbacks::Assignment],
        ) -> Result<Vec<Identified<Teacher>>> {
            self.check()?;
            Ok(Vec::new())
        }

        async fn get_feedbacks_from(
            &self,
            _exercises: &[Identified<Exercise>],
        ) -> Result<Vec<Identified<Feedback>>> {
            self.check()?;
            Ok(self.feedbacks.clone())
        }

        async fn create_feedbacks(
            &self,
            feedbacks: Vec<Feedback>,
        ) -> Result<Vec<Identified<Feedback>>> {
            self.check()?;
            Ok(feedbacks
                .into_iter()
                .enumerate()
                .map(|(i, record)| Identified {
                    id: format!("created-{i}"),
                    record,
                })
                .collect())
        }

        async fn update_feedbacks(
            &self,
            feedbacks: Vec<Identified<Feedback>>,
        ) -> Result<Vec<Identified<Feedback>>> {
            self.check()?;
            Ok(feedbacks)
        }
    }

    impl RepositoryStub {
        fn check(&self) -> Result<()> {
            if self.fail {
                Err(FeedbackError::notion_api("stub repository failure"))
            } else {
                Ok(())
            }
        }
    }

    struct FactoryStub {
        repository: Arc<RepositoryStub>,
    }

    impl RepositoryFactory for FactoryStub {
        fn for_exercise(&self, _config: &NotionConfig) -> Arc<dyn Repository> {
            self.repository.clone()
        }

        fn for_exam(&self, _config: &NotionConfig) -> Arc<dyn Repository> {
            self.repository.clone()
        }
    }

    struct PageReaderStub;

    #[async_trait::async_trait]
    impl PageReader for PageReaderStub {
        async fn page_content(&self, _token: &str, _page_id: &str) -> Result<String> {
            Ok("contenido de la página".to_string())
        }
    }

    fn build_api(transport_fails: bool, repository: RepositoryStub) -> Api {
        Api::new(
            Mailer::new(Arc::new(TransportStub {
                fail: transport_fails,
            })),
            Assigner::new(Arc::new(FactoryStub {
                repository: Arc::new(repository),
            })),
            Arc::new(PageReaderStub),
            "docentes@example.com",
        )
    }

    fn empty_repository(fail: bool) -> RepositoryStub {
        RepositoryStub {
            exercises: Vec::new(),
            feedbacks: Vec::new(),
            fail,
        }
    }

    fn notion_config_json() -> Value {
        json!({
            "notion": {
                "token": "notion.token",
                "db_devolucion": "notion.db_devolucion",
                "db_docente": "notion.db_docente",
                "db_ejercicio": "notion.db_ejercicio"
            }
        })
    }

    fn exercise_mail_params() -> Value {
        json!({
            "to": "to",
            "context": {
                "ejercicio": "context.ejercicio",
                "grupo": "context.grupo",
                "corrector": "context.corrector",
                "nota": "context.nota",
                "correcciones": "context.correcciones"
            }
        })
    }

    fn exam_mail_params() -> Value {
        json!({
            "to": "to",
            "context": {
                "examen": "context.examen",
                "padron": "context.padron",
                "nombre": "context.nombre",
                "corrector": "context.corrector",
                "nota": "context.nota",
                "correcciones": "context.correcciones",
                "nota_final": "context.nota_final",
                "puntos_extras": "context.puntos_extras"
            }
        })
    }

    #[tokio::test]
    async fn test_send_exercise_feedback_handler() {
        // 缺字段 -> 400，消息带缺失路径
        let api = build_api(false, empty_repository(false));
        let response = api.send_exercise_feedback_handler(json!({})).await;
        assert_eq!(response.code, 400);
        assert!(response.message.contains("'to'"));

        // 传输失败 -> 500
        let api = build_api(true, empty_repository(false));
        let response = api
            .send_exercise_feedback_handler(exercise_mail_params())
            .await;
        assert_eq!(response.code, 500);

        // 成功 -> 200，消息体是发送明细
        let api = build_api(false, empty_repository(false));
        let response = api
            .send_exercise_feedback_handler(exercise_mail_params())
            .await;
        assert_eq!(response.code, 200);
        let details: Value = serde_json::from_str(&response.message).unwrap();
        assert_eq!(details["to"], "to");
        assert!(
            details["options"]["subject"]
                .as_str()
                .unwrap()
                .contains("context.ejercicio")
        );
    }

    #[tokio::test]
    async fn test_send_exam_feedback_handler() {
        let api = build_api(false, empty_repository(false));
        let response = api.send_exam_feedback_handler(json!({})).await;
        assert_eq!(response.code, 400);

        let api = build_api(true, empty_repository(false));
        let response = api.send_exam_feedback_handler(exam_mail_params()).await;
        assert_eq!(response.code, 500);

        let api = build_api(false, empty_repository(false));
        let response = api.send_exam_feedback_handler(exam_mail_params()).await;
        assert_eq!(response.code, 200);
        assert!(response.message.contains("context.nota_final"));
    }

    #[tokio::test]
    async fn test_assign_exercise_handler() {
        let api = build_api(false, empty_repository(false));
        let response = api.assign_exercise_handler(json!({})).await;
        assert_eq!(response.code, 400);
        assert!(response.message.contains("'config.notion'"));

        let params = json!({
            "config": notion_config_json(),
            "asignaciones": [{
                "docentes": ["docente 1", "docente 2"],
                "ejercicio": "ejercicio 1",
                "nombre": "grupo 1"
            }]
        });

        let api = build_api(false, empty_repository(true));
        let response = api.assign_exercise_handler(params.clone()).await;
        assert_eq!(response.code, 500);
        assert_eq!(response.message, "Internal server error");

        // 名称都解析不到时仍然 200（静默丢弃约定）
        let api = build_api(false, empty_repository(false));
        let response = api.assign_exercise_handler(params).await;
        assert_eq!(response.code, 200);
        let results: Vec<Value> = serde_json::from_str(&response.message).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0]["nombre"], "grupo 1");
        assert!(results[0].get("id_ejercicio").is_none());
    }

    #[tokio::test]
    async fn test_assign_exam_handler() {
        let api = build_api(false, empty_repository(false));
        let response = api.assign_exam_handler(json!({})).await;
        assert_eq!(response.code, 400);

        let params = json!({
            "config": notion_config_json(),
            "asignaciones": [{
                "docentes": ["docente 1", "docente 2"],
                "ejercicio": "examen 1",
                "nombre": "estudiante 1"
            }]
        });

        let api = build_api(false, empty_repository(true));
        let response = api.assign_exam_handler(params.clone()).await;
        assert_eq!(response.code, 500);

        let api = build_api(false, empty_repository(false));
        let response = api.assign_exam_handler(params).await;
        assert_eq!(response.code, 200);
    }

    #[tokio::test]
    async fn test_get_exercise_feedbacks_handler() {
        let api = build_api(false, empty_repository(false));
        let response = api.get_exercise_feedbacks_handler(json!({})).await;
        assert_eq!(response.code, 400);

        let params = json!({
            "config": notion_config_json(),
            "ejercicio": "ejercicio 1"
        });

        let api = build_api(false, empty_repository(true));
        let response = api.get_exercise_feedbacks_handler(params.clone()).await;
        assert_eq!(response.code, 500);

        let api = build_api(
            false,
            RepositoryStub {
                exercises: vec![Identified {
                    id: "1".to_string(),
                    record: Exercise {
                        name: "ejercicio 1".to_string(),
                    },
                }],
                feedbacks: vec![Identified {
                    id: "1".to_string(),
                    record: Feedback {
                        name: "grupo 1".to_string(),
                        exercise_id: Some("1".to_string()),
                        teacher_ids: vec![],
                    },
                }],
                fail: false,
            },
        );
        let response = api.get_exercise_feedbacks_handler(params).await;
        assert_eq!(response.code, 200);
        let feedbacks: Vec<Value> = serde_json::from_str(&response.message).unwrap();
        assert_eq!(feedbacks[0]["nombre"], "grupo 1");
        assert_eq!(feedbacks[0]["id"], "1");
    }

    #[tokio::test]
    async fn test_get_exam_feedbacks_handler() {
        let api = build_api(false, empty_repository(false));
        let response = api.get_exam_feedbacks_handler(json!({})).await;
        assert_eq!(response.code, 400);

        let params = json!({
            "config": notion_config_json(),
            "ejercicio": "examen 1"
        });
        let response = api.get_exam_feedbacks_handler(params).await;
        assert_eq!(response.code, 200);
        assert_eq!(response.message, "[]");
    }

    #[tokio::test]
    async fn test_get_content_from_page_handler() {
        let api = build_api(false, empty_repository(false));

        let response = api.get_content_from_page_handler(json!({})).await;
        assert_eq!(response.code, 400);
        assert!(response.message.contains("'notion.token'"));

        let response = api
            .get_content_from_page_handler(json!({
                "notion": { "token": "notion.token" },
                "page_id": "page-1"
            }))
            .await;
        assert_eq!(response.code, 200);
        assert_eq!(response.message, "contenido de la página");
    }

    #[tokio::test]
    async fn test_get_teachers_emails_handler() {
        let api = build_api(false, empty_repository(false));

        let response = api.get_teachers_emails_handler(json!({})).await;
        assert_eq!(response.code, 200);
        assert!(!response.message.is_empty());
        assert_eq!(response.message, "docentes@example.com");
    }
}
