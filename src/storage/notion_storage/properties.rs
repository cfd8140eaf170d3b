//! 页面属性映射
//!
//! 后端的通用字段表示（title / relation）与领域逻辑值之间的双向转换。
//! Property 是显式的策略枚举，共享 filter / encode / decode 三个操作。

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::errors::{FeedbackError, Result};

/// 关系引用
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationRef {
    pub id: String,
}

/// 富文本的写入内容
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextContent {
    pub content: String,
}

/// 富文本段：写入时填 text，后端返回时带 plain_text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichText {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plain_text: Option<String>,
}

impl RichText {
    pub fn from_content(content: impl Into<String>) -> Self {
        Self {
            text: Some(TextContent {
                content: content.into(),
            }),
            plain_text: None,
        }
    }

    /// 读取段文本，优先后端返回的 plain_text
    pub fn content(&self) -> &str {
        if let Some(plain) = &self.plain_text {
            plain
        } else if let Some(text) = &self.text {
            &text.content
        } else {
            ""
        }
    }
}

/// 后端字段值的通用线上形态：title 段列表或 relation 引用列表
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageProperty {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Vec<RichText>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relation: Option<Vec<RelationRef>>,
}

/// 逻辑字段值
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    Text(String),
    Reference(String),
    References(Vec<String>),
}

/// 属性转换策略
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Property {
    Title { name: String },
    RelationWithOne { name: String },
    RelationWithMany { name: String },
}

impl Property {
    pub fn title(name: impl Into<String>) -> Self {
        Property::Title { name: name.into() }
    }

    pub fn relation_with_one(name: impl Into<String>) -> Self {
        Property::RelationWithOne { name: name.into() }
    }

    pub fn relation_with_many(name: impl Into<String>) -> Self {
        Property::RelationWithMany { name: name.into() }
    }

    /// 后端属性名
    pub fn name(&self) -> &str {
        match self {
            Property::Title { name }
            | Property::RelationWithOne { name }
            | Property::RelationWithMany { name } => name,
        }
    }

    /// 构造该属性等于给定逻辑值的查询过滤器
    ///
    /// 空 id 表示"关系为空"，而不是"包含空 id"。多值关系对每个请求值
    /// AND 一个 contains（或 is_empty）子句。
    pub fn filter(&self, value: &PropertyValue) -> Result<Value> {
        match (self, value) {
            (Property::Title { name }, PropertyValue::Text(text)) => Ok(json!({
                "property": name,
                "title": { "equals": text },
            })),
            (Property::RelationWithOne { name }, PropertyValue::Reference(id)) => {
                Ok(relation_clause(name, id))
            }
            (Property::RelationWithMany { name }, PropertyValue::References(ids)) => Ok(json!({
                "and": ids.iter().map(|id| relation_clause(name, id)).collect::<Vec<_>>(),
            })),
            _ => Err(self.mismatch(value)),
        }
    }

    /// 逻辑值编码为线上形态
    ///
    /// 单值关系始终写入恰好一个元素。
    pub fn encode(&self, value: &PropertyValue) -> Result<PageProperty> {
        match (self, value) {
            (Property::Title { .. }, PropertyValue::Text(text)) => Ok(PageProperty {
                title: Some(vec![RichText::from_content(text.clone())]),
                relation: None,
            }),
            (Property::RelationWithOne { .. }, PropertyValue::Reference(id)) => Ok(PageProperty {
                title: None,
                relation: Some(vec![RelationRef { id: id.clone() }]),
            }),
            (Property::RelationWithMany { .. }, PropertyValue::References(ids)) => {
                Ok(PageProperty {
                    title: None,
                    relation: Some(
                        ids.iter()
                            .map(|id| RelationRef { id: id.clone() })
                            .collect(),
                    ),
                })
            }
            _ => Err(self.mismatch(value)),
        }
    }

    /// 线上形态解码回逻辑值，字段缺失（或单值关系为空）时返回 None
    pub fn decode(&self, property: &PageProperty) -> Option<PropertyValue> {
        match self {
            Property::Title { .. } => property.title.as_ref().map(|segments| {
                PropertyValue::Text(
                    segments
                        .iter()
                        .map(RichText::content)
                        .collect::<Vec<_>>()
                        .concat(),
                )
            }),
            Property::RelationWithOne { .. } => property
                .relation
                .as_ref()
                .and_then(|refs| refs.first())
                .map(|relation| PropertyValue::Reference(relation.id.clone())),
            Property::RelationWithMany { .. } => property.relation.as_ref().map(|refs| {
                PropertyValue::References(refs.iter().map(|r| r.id.clone()).collect())
            }),
        }
    }

    fn mismatch(&self, value: &PropertyValue) -> FeedbackError {
        FeedbackError::validation(format!(
            "property '{}' cannot map value {:?}",
            self.name(),
            value
        ))
    }
}

fn relation_clause(name: &str, id: &str) -> Value {
    if id.is_empty() {
        json!({ "property": name, "relation": { "is_empty": true } })
    } else {
        json!({ "property": name, "relation": { "contains": id } })
    }
}
