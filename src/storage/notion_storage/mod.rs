//! Notion 风格后端的仓库实现
//!
//! 三个集合（练习、教师、反馈）各自包装成一个类型化 Database，
//! 仓库按每次请求携带的凭据重新构造，不跨请求共享状态。

use std::sync::Arc;

use crate::errors::Result;
use crate::models::feedbacks::{Assignment, Exercise, Feedback, Identified, NotionConfig, Teacher};

use super::{Repository, RepositoryFactory};

pub mod client;
pub mod database;
pub mod properties;
pub mod records;
pub mod schema;

use client::NotionClient;
use database::Database;
use properties::{Property, PropertyValue};
use schema::Schema;

pub fn exercise_schema() -> Schema {
    Schema::new(vec![("nombre", Property::title("Nombre"))])
}

pub fn teacher_schema() -> Schema {
    Schema::new(vec![("nombre", Property::title("Nombre"))])
}

/// 反馈模式：练习与考试只在被批改项关系的后端字段名上不同
pub fn feedback_schema(item_relation: &str) -> Schema {
    Schema::new(vec![
        ("nombre", Property::title("Nombre")),
        ("id_docentes", Property::relation_with_many("Corrector")),
        ("id_ejercicio", Property::relation_with_one(item_relation)),
    ])
}

pub struct NotionRepositoryFactory;

impl NotionRepositoryFactory {
    fn repository(config: &NotionConfig, feedback_schema: Schema) -> NotionRepository {
        let client = Arc::new(NotionClient::new(&config.token));
        NotionRepository {
            exercises: Database::new(client.clone(), &config.exercises_db, exercise_schema()),
            teachers: Database::new(client.clone(), &config.teachers_db, teacher_schema()),
            feedbacks: Database::new(client, &config.feedbacks_db, feedback_schema),
        }
    }
}

impl RepositoryFactory for NotionRepositoryFactory {
    fn for_exercise(&self, config: &NotionConfig) -> Arc<dyn Repository> {
        Arc::new(Self::repository(config, feedback_schema("Ejercicio")))
    }

    fn for_exam(&self, config: &NotionConfig) -> Arc<dyn Repository> {
        Arc::new(Self::repository(config, feedback_schema("Examen")))
    }
}

pub struct NotionRepository {
    exercises: Database<Exercise>,
    teachers: Database<Teacher>,
    feedbacks: Database<Feedback>,
}

#[async_trait::async_trait]
impl Repository for NotionRepository {
    async fn get_exercises_from(
        &self,
        assignments: &[Assignment],
    ) -> Result<Vec<Identified<Exercise>>> {
        let names = assignments
            .iter()
            .map(|assignment| PropertyValue::Text(assignment.exercise.clone()))
            .collect();
        self.exercises
            .query(&[("nombre".to_string(), names)])
            .await
    }

    async fn get_teachers_from(
        &self,
        assignments: &[Assignment],
    ) -> Result<Vec<Identified<Teacher>>> {
        let names = assignments
            .iter()
            .flat_map(|assignment| assignment.teachers.iter())
            .map(|name| PropertyValue::Text(name.clone()))
            .collect();
        self.teachers.query(&[("nombre".to_string(), names)]).await
    }

    async fn get_feedbacks_from(
        &self,
        exercises: &[Identified<Exercise>],
    ) -> Result<Vec<Identified<Feedback>>> {
        // 没有练习时不发起无过滤器的全集合查询
        if exercises.is_empty() {
            return Ok(Vec::new());
        }
        let ids = exercises
            .iter()
            .map(|exercise| PropertyValue::Reference(exercise.id.clone()))
            .collect();
        self.feedbacks
            .query(&[("id_ejercicio".to_string(), ids)])
            .await
    }

    async fn create_feedbacks(&self, feedbacks: Vec<Feedback>) -> Result<Vec<Identified<Feedback>>> {
        self.feedbacks.create(feedbacks).await
    }

    async fn update_feedbacks(
        &self,
        feedbacks: Vec<Identified<Feedback>>,
    ) -> Result<Vec<Identified<Feedback>>> {
        self.feedbacks.update(feedbacks).await
    }
}
