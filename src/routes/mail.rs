use actix_web::{HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;
use serde_json::Value;

use crate::services::Api;

// 懒加载的全局 Api 实例
static API_SERVICE: Lazy<Api> = Lazy::new(Api::from_app_config);

// 发送练习反馈邮件
pub async fn send_exercise_feedback(body: web::Json<Value>) -> ActixResult<HttpResponse> {
    Ok(API_SERVICE
        .send_exercise_feedback_handler(body.into_inner())
        .await
        .into_http_response())
}

// 发送考试反馈邮件
pub async fn send_exam_feedback(body: web::Json<Value>) -> ActixResult<HttpResponse> {
    Ok(API_SERVICE
        .send_exam_feedback_handler(body.into_inner())
        .await
        .into_http_response())
}

// 查询教师通讯组地址
pub async fn get_teachers_emails(body: web::Json<Value>) -> ActixResult<HttpResponse> {
    Ok(API_SERVICE
        .get_teachers_emails_handler(body.into_inner())
        .await
        .into_http_response())
}

// 配置路由
pub fn configure_mail_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/mail")
            .route("/exercise-feedback", web::post().to(send_exercise_feedback))
            .route("/exam-feedback", web::post().to(send_exam_feedback)),
    );

    cfg.service(
        web::scope("/api/v1/teachers").route("/emails", web::post().to(get_teachers_emails)),
    );
}
