//! 批改分配服务
//!
//! 把电子表格生成的分配翻译成后端反馈记录：解析练习与批改者名称，
//! 按提交名划分创建与更新两批写入。两批写入不具原子性，中途失败
//! 以 500 暴露给调用方，重跑会按名称匹配收敛。

mod resolve;

use std::sync::Arc;

use tracing::info;

use crate::errors::Result;
use crate::models::feedbacks::{Assignment, Feedback, Identified, NotionConfig};
use crate::storage::{Repository, RepositoryFactory};

pub struct Assigner {
    factory: Arc<dyn RepositoryFactory>,
}

impl Assigner {
    pub fn new(factory: Arc<dyn RepositoryFactory>) -> Self {
        Self { factory }
    }

    /// 分配练习批改者
    pub async fn assign_exercise(
        &self,
        config: &NotionConfig,
        assignments: &[Assignment],
    ) -> Result<Vec<Identified<Feedback>>> {
        Self::assign(self.factory.for_exercise(config), assignments).await
    }

    /// 分配考试批改者
    pub async fn assign_exam(
        &self,
        config: &NotionConfig,
        assignments: &[Assignment],
    ) -> Result<Vec<Identified<Feedback>>> {
        Self::assign(self.factory.for_exam(config), assignments).await
    }

    /// 查询某个练习的全部反馈记录
    pub async fn get_exercise_feedbacks(
        &self,
        config: &NotionConfig,
        exercise_name: &str,
    ) -> Result<Vec<Identified<Feedback>>> {
        Self::feedbacks_for(self.factory.for_exercise(config), exercise_name).await
    }

    /// 查询某个考试的全部反馈记录
    pub async fn get_exam_feedbacks(
        &self,
        config: &NotionConfig,
        exam_name: &str,
    ) -> Result<Vec<Identified<Feedback>>> {
        Self::feedbacks_for(self.factory.for_exam(config), exam_name).await
    }

    async fn assign(
        repository: Arc<dyn Repository>,
        assignments: &[Assignment],
    ) -> Result<Vec<Identified<Feedback>>> {
        let exercises = repository.get_exercises_from(assignments).await?;
        let teachers = repository.get_teachers_from(assignments).await?;
        let drafts = resolve::build_drafts(assignments, &exercises, &teachers);

        let existing = repository.get_feedbacks_from(&exercises).await?;
        let (to_create, to_update) = resolve::partition(drafts, &existing);
        info!(
            creating = to_create.len(),
            updating = to_update.len(),
            "applying assignment batch"
        );

        let mut results = repository.create_feedbacks(to_create).await?;
        let mut updated = repository.update_feedbacks(to_update).await?;
        results.append(&mut updated);
        Ok(results)
    }

    async fn feedbacks_for(
        repository: Arc<dyn Repository>,
        item_name: &str,
    ) -> Result<Vec<Identified<Feedback>>> {
        // 用一个只带名称的探针分配复用按名查询
        let probe = Assignment {
            name: String::new(),
            exercise: item_name.to_string(),
            teachers: Vec::new(),
        };
        let exercises = repository.get_exercises_from(std::slice::from_ref(&probe)).await?;
        repository.get_feedbacks_from(&exercises).await
    }
}
