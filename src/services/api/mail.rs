//! 反馈邮件处理函数

use serde_json::Value;

use crate::errors::Result;
use crate::models::mail::{ExamFeedbackContext, ExerciseFeedbackContext};
use crate::models::{Request, Response};

use super::{Api, respond};

/// 发送练习反馈邮件
pub(super) async fn send_exercise_feedback(api: &Api, payload: Value) -> Response {
    respond(try_send_exercise_feedback(api, Request::new(payload)).await)
}

/// 发送考试反馈邮件
pub(super) async fn send_exam_feedback(api: &Api, payload: Value) -> Response {
    respond(try_send_exam_feedback(api, Request::new(payload)).await)
}

async fn try_send_exercise_feedback(api: &Api, request: Request) -> Result<String> {
    let to = request.parse_string("to")?;
    let context = ExerciseFeedbackContext {
        exercise: request.parse_string("context.ejercicio")?,
        group: request.parse_string("context.grupo")?,
        grader: request.parse_string("context.corrector")?,
        grade: request.parse_string("context.nota")?,
        corrections: request.parse_string("context.correcciones")?,
    };

    let details = api.mailer.send_exercise_feedback(&context, &to).await?;
    Ok(serde_json::to_string(&details)?)
}

async fn try_send_exam_feedback(api: &Api, request: Request) -> Result<String> {
    let to = request.parse_string("to")?;
    let context = ExamFeedbackContext {
        exam: request.parse_string("context.examen")?,
        student_id: request.parse_string("context.padron")?,
        student_name: request.parse_string("context.nombre")?,
        grader: request.parse_string("context.corrector")?,
        grade: request.parse_string("context.nota")?,
        corrections: request.parse_string("context.correcciones")?,
        bonus_points: request.parse_string("context.puntos_extras")?,
        final_grade: request.parse_string("context.nota_final")?,
    };

    let details = api.mailer.send_exam_feedback(&context, &to).await?;
    Ok(serde_json::to_string(&details)?)
}
