//! 页面内容与通讯录处理函数

use serde_json::Value;

use crate::models::{Request, Response};

use super::{Api, respond};

/// 读取后端页面的纯文本内容（批改详情正文）
pub(super) async fn get_content_from_page(api: &Api, payload: Value) -> Response {
    let request = Request::new(payload);
    let result = async {
        let token = request.parse_string("notion.token")?;
        let page_id = request.parse_string("page_id")?;
        api.pages.page_content(&token, &page_id).await
    }
    .await;
    respond(result)
}

/// 返回配置的教师通讯组地址，无必填字段
pub(super) async fn get_teachers_emails(api: &Api, _payload: Value) -> Response {
    Response::ok(api.teachers_email.clone())
}
