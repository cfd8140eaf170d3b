use actix_web::{HttpResponse, http::StatusCode};
use serde::{Deserialize, Serialize};

// 统一的API响应结构：状态码 + 消息体
//
// 电子表格客户端直接对响应体做 JSON.parse，所以 message 原样作为
// HTTP body 返回，code 作为 HTTP 状态码。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub code: u16,
    pub message: String,
}

impl Response {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn ok(message: impl Into<String>) -> Self {
        Self::new(200, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(400, message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(500, message)
    }

    /// 转换为 actix HttpResponse，未知状态码回退到 500
    pub fn into_http_response(self) -> HttpResponse {
        let status =
            StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        HttpResponse::build(status).body(self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(Response::ok("done"), Response::new(200, "done"));
        assert_eq!(Response::bad_request("bad"), Response::new(400, "bad"));
        assert_eq!(Response::internal_error("boom"), Response::new(500, "boom"));
    }

    #[test]
    fn test_into_http_response_status() {
        let resp = Response::ok("body").into_http_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = Response::bad_request("body").into_http_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        // 非法状态码回退到 500
        let resp = Response::new(1000, "body").into_http_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
