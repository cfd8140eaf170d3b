//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_feedback_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum FeedbackError {
            $($variant(String),)*
        }

        impl FeedbackError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(FeedbackError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(FeedbackError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(FeedbackError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl FeedbackError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        FeedbackError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_feedback_errors! {
    MissingProperty("E001", "Missing Property"),
    Validation("E002", "Validation Error"),
    NotionApi("E003", "Notion API Error"),
    MailTransport("E004", "Mail Transport Error"),
    Serialization("E005", "Serialization Error"),
    Configuration("E006", "Configuration Error"),
    HttpClient("E007", "HTTP Client Error"),
}

impl FeedbackError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 请求缺少必填字段映射到 400，其余错误都映射到 500
    pub fn is_bad_request(&self) -> bool {
        matches!(self, FeedbackError::MissingProperty(_))
    }
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for FeedbackError {}

// 为常见的错误类型实现 From trait
impl From<serde_json::Error> for FeedbackError {
    fn from(err: serde_json::Error) -> Self {
        FeedbackError::Serialization(err.to_string())
    }
}

impl From<reqwest::Error> for FeedbackError {
    fn from(err: reqwest::Error) -> Self {
        FeedbackError::HttpClient(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FeedbackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(FeedbackError::missing_property("test").code(), "E001");
        assert_eq!(FeedbackError::notion_api("test").code(), "E003");
        assert_eq!(FeedbackError::mail_transport("test").code(), "E004");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            FeedbackError::missing_property("test").error_type(),
            "Missing Property"
        );
        assert_eq!(
            FeedbackError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = FeedbackError::notion_api("query failed");
        assert_eq!(err.message(), "query failed");
    }

    #[test]
    fn test_bad_request_mapping() {
        assert!(FeedbackError::missing_property("x").is_bad_request());
        assert!(!FeedbackError::notion_api("x").is_bad_request());
        assert!(!FeedbackError::mail_transport("x").is_bad_request());
    }

    #[test]
    fn test_format_simple() {
        let err = FeedbackError::validation("invalid payload");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("invalid payload"));
    }
}
