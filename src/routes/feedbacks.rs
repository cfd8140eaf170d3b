use actix_web::{HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;
use serde_json::Value;

use crate::services::Api;

// 懒加载的全局 Api 实例
static API_SERVICE: Lazy<Api> = Lazy::new(Api::from_app_config);

// 分配练习批改者
pub async fn assign_exercise(body: web::Json<Value>) -> ActixResult<HttpResponse> {
    Ok(API_SERVICE
        .assign_exercise_handler(body.into_inner())
        .await
        .into_http_response())
}

// 分配考试批改者
pub async fn assign_exam(body: web::Json<Value>) -> ActixResult<HttpResponse> {
    Ok(API_SERVICE
        .assign_exam_handler(body.into_inner())
        .await
        .into_http_response())
}

// 查询练习反馈记录
pub async fn get_exercise_feedbacks(body: web::Json<Value>) -> ActixResult<HttpResponse> {
    Ok(API_SERVICE
        .get_exercise_feedbacks_handler(body.into_inner())
        .await
        .into_http_response())
}

// 查询考试反馈记录
pub async fn get_exam_feedbacks(body: web::Json<Value>) -> ActixResult<HttpResponse> {
    Ok(API_SERVICE
        .get_exam_feedbacks_handler(body.into_inner())
        .await
        .into_http_response())
}

// 配置路由
pub fn configure_feedback_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/assignments")
            .route("/exercise", web::post().to(assign_exercise))
            .route("/exam", web::post().to(assign_exam)),
    );

    cfg.service(
        web::scope("/api/v1/feedbacks")
            .route("/exercise", web::post().to(get_exercise_feedbacks))
            .route("/exam", web::post().to(get_exam_feedbacks)),
    );
}
