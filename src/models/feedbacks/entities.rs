//! 领域实体定义
//!
//! 线上字段名由电子表格端固定为西班牙语（nombre、ejercicio、docentes、
//! id_ejercicio、id_docentes 等），这里统一通过 serde rename 映射。

use serde::{Deserialize, Serialize};

/// 练习（或考试），只读，由教学端在后端数据库中维护
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    #[serde(rename = "nombre")]
    pub name: String,
}

/// 教师（批改者），只读
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    #[serde(rename = "nombre")]
    pub name: String,
}

/// 反馈记录：一条提交对应一个练习关系和零到多个批改者关系
///
/// exercise_id 为 None 表示练习名未解析成功（沿用原系统的静默丢弃约定）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "id_ejercicio", skip_serializing_if = "Option::is_none")]
    pub exercise_id: Option<String>,
    #[serde(rename = "id_docentes", default)]
    pub teacher_ids: Vec<String>,
}

/// 已持久化的记录：后端 id 加展平的记录本体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identified<T> {
    pub id: String,
    #[serde(flatten)]
    pub record: T,
}

/// 批改分配：电子表格生成的临时值，只被 Assigner 消费，从不直接持久化
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "ejercicio")]
    pub exercise: String,
    #[serde(rename = "docentes", default)]
    pub teachers: Vec<String>,
}

/// 每次请求随载荷携带的后端凭据与三个集合的标识
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotionConfig {
    pub token: String,
    #[serde(rename = "db_ejercicio")]
    pub exercises_db: String,
    #[serde(rename = "db_docente")]
    pub teachers_db: String,
    #[serde(rename = "db_devolucion")]
    pub feedbacks_db: String,
}
