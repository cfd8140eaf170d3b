//! 实体与逻辑值的映射实现

use std::collections::HashMap;

use crate::errors::Result;
use crate::models::feedbacks::{Exercise, Feedback, Teacher};

use super::properties::PropertyValue;
use super::schema::{NotionRecord, take_reference, take_references, take_text};

impl NotionRecord for Exercise {
    fn to_values(&self) -> Vec<(String, PropertyValue)> {
        vec![("nombre".to_string(), PropertyValue::Text(self.name.clone()))]
    }

    fn from_values(mut values: HashMap<String, PropertyValue>) -> Result<Self> {
        Ok(Exercise {
            name: take_text(&mut values, "nombre")?,
        })
    }
}

impl NotionRecord for Teacher {
    fn to_values(&self) -> Vec<(String, PropertyValue)> {
        vec![("nombre".to_string(), PropertyValue::Text(self.name.clone()))]
    }

    fn from_values(mut values: HashMap<String, PropertyValue>) -> Result<Self> {
        Ok(Teacher {
            name: take_text(&mut values, "nombre")?,
        })
    }
}

impl NotionRecord for Feedback {
    fn to_values(&self) -> Vec<(String, PropertyValue)> {
        let mut values = vec![
            ("nombre".to_string(), PropertyValue::Text(self.name.clone())),
            (
                "id_docentes".to_string(),
                PropertyValue::References(self.teacher_ids.clone()),
            ),
        ];
        // 未解析的练习不写关系（静默丢弃约定）
        if let Some(exercise_id) = &self.exercise_id {
            values.push((
                "id_ejercicio".to_string(),
                PropertyValue::Reference(exercise_id.clone()),
            ));
        }
        values
    }

    fn from_values(mut values: HashMap<String, PropertyValue>) -> Result<Self> {
        Ok(Feedback {
            name: take_text(&mut values, "nombre")?,
            exercise_id: take_reference(&mut values, "id_ejercicio"),
            teacher_ids: take_references(&mut values, "id_docentes"),
        })
    }
}
