//! 批改分配处理函数

use serde_json::Value;

use crate::errors::Result;
use crate::models::feedbacks::{Assignment, NotionConfig};
use crate::models::{Request, Response};

use super::{Api, respond};

/// 为练习提交分配批改者
pub(super) async fn assign_exercise(api: &Api, payload: Value) -> Response {
    respond(try_assign(api, Request::new(payload), ItemKind::Exercise).await)
}

/// 为考试提交分配批改者
pub(super) async fn assign_exam(api: &Api, payload: Value) -> Response {
    respond(try_assign(api, Request::new(payload), ItemKind::Exam).await)
}

enum ItemKind {
    Exercise,
    Exam,
}

async fn try_assign(api: &Api, request: Request, kind: ItemKind) -> Result<String> {
    let config: NotionConfig = request.parse("config.notion")?;
    let assignments: Vec<Assignment> = request.parse("asignaciones")?;

    let results = match kind {
        ItemKind::Exercise => api.assigner.assign_exercise(&config, &assignments).await?,
        ItemKind::Exam => api.assigner.assign_exam(&config, &assignments).await?,
    };
    Ok(serde_json::to_string(&results)?)
}
