//! 反馈查询处理函数

use serde_json::Value;

use crate::errors::Result;
use crate::models::feedbacks::NotionConfig;
use crate::models::{Request, Response};

use super::{Api, respond};

/// 查询某练习的全部反馈记录
pub(super) async fn get_exercise_feedbacks(api: &Api, payload: Value) -> Response {
    respond(try_get_feedbacks(api, Request::new(payload), ItemKind::Exercise).await)
}

/// 查询某考试的全部反馈记录
pub(super) async fn get_exam_feedbacks(api: &Api, payload: Value) -> Response {
    respond(try_get_feedbacks(api, Request::new(payload), ItemKind::Exam).await)
}

enum ItemKind {
    Exercise,
    Exam,
}

async fn try_get_feedbacks(api: &Api, request: Request, kind: ItemKind) -> Result<String> {
    let config: NotionConfig = request.parse("config.notion")?;
    // 练习和考试请求都用 ejercicio 键携带名称（电子表格端的既有约定）
    let item_name = request.parse_string("ejercicio")?;

    let feedbacks = match kind {
        ItemKind::Exercise => {
            api.assigner
                .get_exercise_feedbacks(&config, &item_name)
                .await?
        }
        ItemKind::Exam => api.assigner.get_exam_feedbacks(&config, &item_name).await?,
    };
    Ok(serde_json::to_string(&feedbacks)?)
}
