use std::sync::Arc;

use crate::errors::Result;
use crate::models::feedbacks::{Assignment, Exercise, Feedback, Identified, NotionConfig, Teacher};

pub mod notion_storage;

/// 反馈数据的读写接口
///
/// 练习与教师集合只读，反馈集合可创建和更新。后端错误原样向上传播，
/// 不做重试，也不处理批量写入的部分失败。
#[async_trait::async_trait]
pub trait Repository: Send + Sync {
    // 按分配中出现的练习名查询练习
    async fn get_exercises_from(
        &self,
        assignments: &[Assignment],
    ) -> Result<Vec<Identified<Exercise>>>;
    // 按分配中出现的批改者名（并集）查询教师
    async fn get_teachers_from(
        &self,
        assignments: &[Assignment],
    ) -> Result<Vec<Identified<Teacher>>>;
    // 查询指定练习已有的反馈记录
    async fn get_feedbacks_from(
        &self,
        exercises: &[Identified<Exercise>],
    ) -> Result<Vec<Identified<Feedback>>>;
    // 批量创建反馈记录
    async fn create_feedbacks(&self, feedbacks: Vec<Feedback>) -> Result<Vec<Identified<Feedback>>>;
    // 批量更新反馈记录（携带既有记录 id）
    async fn update_feedbacks(
        &self,
        feedbacks: Vec<Identified<Feedback>>,
    ) -> Result<Vec<Identified<Feedback>>>;
}

/// 按请求级配置构造仓库
///
/// 练习与考试的反馈模式只在"被批改项"关系的后端字段名上不同
/// （Ejercicio / Examen），由工厂选择。
pub trait RepositoryFactory: Send + Sync {
    fn for_exercise(&self, config: &NotionConfig) -> Arc<dyn Repository>;
    fn for_exam(&self, config: &NotionConfig) -> Arc<dyn Repository>;
}
