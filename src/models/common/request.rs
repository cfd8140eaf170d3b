//! 请求解析器
//!
//! 包装一个未类型化的 JSON 载荷，通过点分路径提供类型化访问。
//! 路径缺失或类型不符时返回带原始载荷快照的 MissingProperty 错误。

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::{FeedbackError, Result};

/// 未类型化请求载荷的包装器，无副作用，不修改原始载荷
#[derive(Debug, Clone)]
pub struct Request {
    payload: Value,
}

impl Request {
    pub fn new(payload: Value) -> Self {
        Self { payload }
    }

    /// 读取点分路径下的字符串字段
    ///
    /// 标量（字符串、数字、布尔值）按其显示形式读取，电子表格端
    /// 会把成绩、组号等以数字发送。对象、数组和 null 视为类型不符。
    pub fn parse_string(&self, path: &str) -> Result<String> {
        let value = self
            .lookup(path)
            .ok_or_else(|| self.missing_property(path))?;

        match value {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            _ => Err(self.missing_property(path)),
        }
    }

    /// 读取点分路径下的任意可反序列化结构
    pub fn parse<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let value = self
            .lookup(path)
            .ok_or_else(|| self.missing_property(path))?;

        serde_json::from_value(value.clone()).map_err(|_| self.missing_property(path))
    }

    fn lookup(&self, path: &str) -> Option<&Value> {
        let mut current = &self.payload;
        for segment in path.split('.') {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    fn missing_property(&self, path: &str) -> FeedbackError {
        FeedbackError::missing_property(Self::missing_property_error_message(
            path,
            &self.payload.to_string(),
        ))
    }

    pub fn missing_property_error_message(path: &str, payload: &str) -> String {
        format!("Missing property '{path}' in request {payload}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_simple_and_nested_string() {
        let request = Request::new(json!({
            "prueba": "exito",
            "data": { "message": "hi!" }
        }));

        assert_eq!(request.parse_string("prueba").unwrap(), "exito");
        assert_eq!(request.parse_string("data.message").unwrap(), "hi!");
    }

    #[test]
    fn test_parse_missing_path_names_path_and_payload() {
        let payload = json!({
            "prueba": "exito",
            "data": { "message": "hi!" }
        });
        let request = Request::new(payload.clone());

        let err = request.parse_string("data.message_missing").unwrap_err();
        assert_eq!(
            err.message(),
            Request::missing_property_error_message("data.message_missing", &payload.to_string())
        );

        let err = request.parse_string("data_missing.message").unwrap_err();
        assert!(err.message().contains("data_missing.message"));
        assert!(err.message().contains("exito"));
        assert!(err.is_bad_request());
    }

    #[test]
    fn test_parse_string_coerces_scalars() {
        let request = Request::new(json!({ "grupo": 7, "activo": true }));

        assert_eq!(request.parse_string("grupo").unwrap(), "7");
        assert_eq!(request.parse_string("activo").unwrap(), "true");
    }

    #[test]
    fn test_parse_string_rejects_non_scalars() {
        let request = Request::new(json!({ "data": { "inner": {} }, "lista": [1, 2] }));

        assert!(request.parse_string("data.inner").is_err());
        assert!(request.parse_string("lista").is_err());
    }

    #[test]
    fn test_parse_typed() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Inner {
            message: String,
        }

        let request = Request::new(json!({ "data": { "message": "hi!" } }));
        let inner: Inner = request.parse("data").unwrap();
        assert_eq!(inner.message, "hi!");

        let err = request.parse::<Inner>("missing").unwrap_err();
        assert!(err.message().contains("'missing'"));
    }

    #[test]
    fn test_parse_typed_wrong_shape_is_missing_property() {
        let request = Request::new(json!({ "data": "not an object" }));
        let err = request
            .parse::<std::collections::HashMap<String, String>>("data")
            .unwrap_err();
        assert!(err.is_bad_request());
    }
}
