use actix_web::{HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;
use serde_json::Value;

use crate::services::Api;

// 懒加载的全局 Api 实例
static API_SERVICE: Lazy<Api> = Lazy::new(Api::from_app_config);

// 读取页面纯文本内容
pub async fn get_content_from_page(body: web::Json<Value>) -> ActixResult<HttpResponse> {
    Ok(API_SERVICE
        .get_content_from_page_handler(body.into_inner())
        .await
        .into_http_response())
}

// 配置路由
pub fn configure_page_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/v1/pages").route("/content", web::post().to(get_content_from_page)));
}
