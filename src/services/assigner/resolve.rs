//! 名称解析与创建 / 更新划分

use tracing::warn;

use crate::models::feedbacks::{Assignment, Exercise, Feedback, Identified, Teacher};

/// 把分配翻译为反馈记录草稿
///
/// 解析不到的练习名或批改者名从关系中静默丢弃（沿用原系统的约定，
/// 只记 warn 日志），不会让整批分配失败。
pub(super) fn build_drafts(
    assignments: &[Assignment],
    exercises: &[Identified<Exercise>],
    teachers: &[Identified<Teacher>],
) -> Vec<Feedback> {
    assignments
        .iter()
        .map(|assignment| {
            let exercise_id = exercises
                .iter()
                .find(|exercise| exercise.record.name == assignment.exercise)
                .map(|exercise| exercise.id.clone());
            if exercise_id.is_none() {
                warn!(
                    exercise = %assignment.exercise,
                    submission = %assignment.name,
                    "exercise name not found, leaving relation empty"
                );
            }

            let teacher_ids = assignment
                .teachers
                .iter()
                .filter_map(|name| {
                    let teacher = teachers
                        .iter()
                        .find(|teacher| &teacher.record.name == name)
                        .map(|teacher| teacher.id.clone());
                    if teacher.is_none() {
                        warn!(
                            teacher = %name,
                            submission = %assignment.name,
                            "grader name not found, dropping from relation"
                        );
                    }
                    teacher
                })
                .collect();

            Feedback {
                name: assignment.name.clone(),
                exercise_id,
                teacher_ids,
            }
        })
        .collect()
}

/// 按提交名划分草稿：已有反馈记录的走更新（携带原 id），其余走创建
pub(super) fn partition(
    drafts: Vec<Feedback>,
    existing: &[Identified<Feedback>],
) -> (Vec<Feedback>, Vec<Identified<Feedback>>) {
    let mut to_create = Vec::new();
    let mut to_update = Vec::new();

    for draft in drafts {
        match existing
            .iter()
            .find(|feedback| feedback.record.name == draft.name)
        {
            Some(current) => to_update.push(Identified {
                id: current.id.clone(),
                record: draft,
            }),
            None => to_create.push(draft),
        }
    }

    (to_create, to_update)
}
