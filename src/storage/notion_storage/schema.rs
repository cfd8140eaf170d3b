//! 模式定义
//!
//! Schema 把逻辑字段名映射到属性策略，实体经由 NotionRecord 与
//! 逻辑值集合互转，不再为每个实体手写线上格式转换。

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::errors::{FeedbackError, Result};
use crate::models::feedbacks::Identified;

use super::client::Page;
use super::properties::{PageProperty, Property, PropertyValue};

/// 实体与逻辑值集合之间的双向映射
pub trait NotionRecord: Sized + Send + Sync {
    /// 逻辑字段名 -> 值，跳过未设置的可选字段
    fn to_values(&self) -> Vec<(String, PropertyValue)>;
    /// 从解码出的逻辑值集合重建实体
    fn from_values(values: HashMap<String, PropertyValue>) -> Result<Self>;
}

/// 逻辑字段名到属性策略的有序映射
#[derive(Debug, Clone)]
pub struct Schema {
    properties: Vec<(String, Property)>,
}

impl Schema {
    pub fn new(properties: Vec<(&str, Property)>) -> Self {
        Self {
            properties: properties
                .into_iter()
                .map(|(field, property)| (field.to_string(), property))
                .collect(),
        }
    }

    fn property(&self, field: &str) -> Result<&Property> {
        self.properties
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, property)| property)
            .ok_or_else(|| {
                FeedbackError::validation(format!("unknown schema field '{field}'"))
            })
    }

    /// 实体编码为后端页面属性对象，键为后端属性名
    pub fn encode<T: NotionRecord>(&self, record: &T) -> Result<Value> {
        let mut properties = Map::new();
        for (field, value) in record.to_values() {
            let property = self.property(&field)?;
            properties.insert(
                property.name().to_string(),
                serde_json::to_value(property.encode(&value)?)?,
            );
        }
        Ok(Value::Object(properties))
    }

    /// 后端页面解码为带 id 的实体
    pub fn decode<T: NotionRecord>(&self, page: &Page) -> Result<Identified<T>> {
        let mut values = HashMap::new();
        for (field, property) in &self.properties {
            if let Some(page_property) = page.properties.get(property.name()) {
                if let Some(value) = property.decode(page_property) {
                    values.insert(field.clone(), value);
                }
            }
        }
        Ok(Identified {
            id: page.id.clone(),
            record: T::from_values(values)?,
        })
    }

    /// 组合查询过滤器：同一字段的多个值取 OR，字段之间取 AND。
    /// 没有值的字段跳过；没有任何子句时返回 None（查询全部）。
    pub fn filter(&self, criteria: &[(String, Vec<PropertyValue>)]) -> Result<Option<Value>> {
        let mut clauses = Vec::new();
        for (field, values) in criteria {
            if values.is_empty() {
                continue;
            }
            let property = self.property(field)?;
            let mut alternatives = Vec::new();
            for value in values {
                alternatives.push(property.filter(value)?);
            }
            clauses.push(if alternatives.len() == 1 {
                alternatives.remove(0)
            } else {
                serde_json::json!({ "or": alternatives })
            });
        }

        Ok(match clauses.len() {
            0 => None,
            1 => Some(clauses.remove(0)),
            _ => Some(serde_json::json!({ "and": clauses })),
        })
    }
}

pub(super) fn take_text(
    values: &mut HashMap<String, PropertyValue>,
    field: &str,
) -> Result<String> {
    match values.remove(field) {
        Some(PropertyValue::Text(text)) => Ok(text),
        _ => Err(FeedbackError::validation(format!(
            "page is missing text field '{field}'"
        ))),
    }
}

pub(super) fn take_reference(
    values: &mut HashMap<String, PropertyValue>,
    field: &str,
) -> Option<String> {
    match values.remove(field) {
        Some(PropertyValue::Reference(id)) => Some(id),
        _ => None,
    }
}

pub(super) fn take_references(
    values: &mut HashMap<String, PropertyValue>,
    field: &str,
) -> Vec<String> {
    match values.remove(field) {
        Some(PropertyValue::References(ids)) => ids,
        _ => Vec::new(),
    }
}
