use actix_web::error::JsonPayloadError;
use actix_web::{Error, HttpRequest, error::InternalError};
use tracing::debug;

use crate::models::Response;

/// JSON 请求体解析错误处理器
///
/// 请求体不是合法 JSON 时返回与业务层一致的 400 纯文本响应。
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    debug!("JSON payload error on {}: {}", req.path(), err);

    let response = Response::bad_request(format!("Invalid JSON payload: {err}"));
    InternalError::from_response(err, response.into_http_response()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_json_error_becomes_bad_request() {
        let req = TestRequest::default().to_http_request();
        let err = json_error_handler(JsonPayloadError::ContentType, &req);
        let response = err.error_response();
        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }
}
