//! 邮件模型定义

use serde::{Deserialize, Serialize};

/// 练习反馈邮件的渲染上下文
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseFeedbackContext {
    #[serde(rename = "ejercicio")]
    pub exercise: String,
    #[serde(rename = "grupo")]
    pub group: String,
    #[serde(rename = "corrector")]
    pub grader: String,
    #[serde(rename = "nota")]
    pub grade: String,
    #[serde(rename = "correcciones")]
    pub corrections: String,
}

/// 考试反馈邮件的渲染上下文
///
/// bonus_points 目前不出现在正文里，但属于电子表格端约定的必填字段。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamFeedbackContext {
    #[serde(rename = "examen")]
    pub exam: String,
    #[serde(rename = "padron")]
    pub student_id: String,
    #[serde(rename = "nombre")]
    pub student_name: String,
    #[serde(rename = "corrector")]
    pub grader: String,
    #[serde(rename = "nota")]
    pub grade: String,
    #[serde(rename = "correcciones")]
    pub corrections: String,
    #[serde(rename = "puntos_extras")]
    pub bonus_points: String,
    #[serde(rename = "nota_final")]
    pub final_grade: String,
}

/// 传给邮件传输层的渲染结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailOptions {
    pub subject: String,
    pub text: String,
    pub html: String,
}

/// 完整的发送明细，成功响应中原样序列化返回，
/// 电子表格的下载流程会保存它并在发送流程中复用
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailDetails {
    pub to: String,
    pub options: EmailOptions,
}
