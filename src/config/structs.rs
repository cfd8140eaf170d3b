use serde::{Deserialize, Serialize};

/// 应用配置结构体
///
/// 后端令牌和三个集合的标识随每次请求到达，不在这里配置。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub notion: NotionApiConfig,
    pub mailer: MailerConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            system_name: "rust-feedback-bridge".to_string(),
            environment: "development".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub unix_socket_path: String,
    pub workers: usize,
    pub max_workers: usize,
    pub timeouts: TimeoutConfig,
    pub limits: LimitConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            unix_socket_path: String::new(),
            workers: 0, // 0 表示按 CPU 数自动
            max_workers: 8,
            timeouts: TimeoutConfig::default(),
            limits: LimitConfig::default(),
        }
    }
}

/// 超时配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeoutConfig {
    pub client_request: u64,
    pub client_disconnect: u64,
    pub keep_alive: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            client_request: 5000,
            client_disconnect: 1000,
            keep_alive: 30,
        }
    }
}

/// 限制配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitConfig {
    pub max_payload_size: usize,
}

impl Default for LimitConfig {
    fn default() -> Self {
        Self {
            max_payload_size: 1024 * 1024,
        }
    }
}

/// CORS 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub max_age: usize,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self { max_age: 3600 }
    }
}

/// 结构化数据后端的静态配置（凭据随请求到达）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotionApiConfig {
    pub base_url: String,
    pub version: String,
}

impl Default for NotionApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.notion.com".to_string(),
            version: "2022-06-28".to_string(),
        }
    }
}

/// 邮件中继配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MailerConfig {
    pub api_url: String,
    #[serde(skip_serializing)] // 不序列化到JSON响应中
    pub token: String,
    pub from: String,
    pub reply_to: String,
    pub sender_name: String,
    /// 教师通讯组地址，get_teachers_emails 直接返回
    pub teachers_email: String,
}

impl Default for MailerConfig {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            token: String::new(),
            from: String::new(),
            reply_to: String::new(),
            sender_name: "Docentes".to_string(),
            teachers_email: String::new(),
        }
    }
}
