//! Feedback Bridge - 课程批改反馈桥接服务
//!
//! 基于 Actix Web 构建的反馈分发后端：把结构化数据后端中的批改记录
//! 整理成邮件发给学生，并为电子表格前端提供批改者分配接口。
//!
//! # 架构
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层（邮件、分配、API 门面）
//! - `storage`: 数据存储层（Notion API）
//! - `utils`: 工具函数

pub mod config;
pub mod errors;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
