//! 结构化数据后端的 HTTP 客户端
//!
//! 覆盖本服务用到的四个端点：集合查询（带游标分页）、页面创建、
//! 页面更新、块内容读取。令牌随请求到达，基础地址和线上版本来自配置。

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

use crate::config::AppConfig;
use crate::errors::{FeedbackError, Result};

use super::properties::PageProperty;

/// 后端页面：id 加命名属性集合，未知属性类型被忽略
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    pub id: String,
    #[serde(default)]
    pub properties: HashMap<String, PageProperty>,
}

/// 集合查询的单页结果
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub results: Vec<Page>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

pub struct NotionClient {
    http: reqwest::Client,
    token: String,
    base_url: String,
    version: String,
}

impl NotionClient {
    pub fn new(token: impl Into<String>) -> Self {
        let notion = &AppConfig::get().notion;
        Self {
            http: reqwest::Client::new(),
            token: token.into(),
            base_url: notion.base_url.trim_end_matches('/').to_string(),
            version: notion.version.clone(),
        }
    }

    /// 查询集合的一页结果
    pub async fn query_database(
        &self,
        database_id: &str,
        filter: Option<&Value>,
        start_cursor: Option<&str>,
    ) -> Result<QueryResponse> {
        let mut body = json!({});
        if let Some(filter) = filter {
            body["filter"] = filter.clone();
        }
        if let Some(cursor) = start_cursor {
            body["start_cursor"] = json!(cursor);
        }

        debug!(database_id, "querying database");
        let response = self
            .http
            .post(format!("{}/v1/databases/{database_id}/query", self.base_url))
            .bearer_auth(&self.token)
            .header("Notion-Version", &self.version)
            .json(&body)
            .send()
            .await?;

        Self::deserialize(response).await
    }

    /// 在集合中创建一个页面
    pub async fn create_page(&self, database_id: &str, properties: Value) -> Result<Page> {
        let body = json!({
            "parent": { "database_id": database_id },
            "properties": properties,
        });

        debug!(database_id, "creating page");
        let response = self
            .http
            .post(format!("{}/v1/pages", self.base_url))
            .bearer_auth(&self.token)
            .header("Notion-Version", &self.version)
            .json(&body)
            .send()
            .await?;

        Self::deserialize(response).await
    }

    /// 更新既有页面的属性
    pub async fn update_page(&self, page_id: &str, properties: Value) -> Result<Page> {
        let body = json!({ "properties": properties });

        debug!(page_id, "updating page");
        let response = self
            .http
            .patch(format!("{}/v1/pages/{page_id}", self.base_url))
            .bearer_auth(&self.token)
            .header("Notion-Version", &self.version)
            .json(&body)
            .send()
            .await?;

        Self::deserialize(response).await
    }

    /// 读取页面子块的纯文本内容，块之间换行连接
    pub async fn page_content(&self, block_id: &str) -> Result<String> {
        let mut lines: Vec<String> = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let mut url = format!("{}/v1/blocks/{block_id}/children", self.base_url);
            if let Some(cursor) = &cursor {
                url.push_str(&format!("?start_cursor={cursor}"));
            }

            let response = self
                .http
                .get(url)
                .bearer_auth(&self.token)
                .header("Notion-Version", &self.version)
                .send()
                .await?;
            let body: Value = Self::deserialize(response).await?;

            if let Some(results) = body.get("results").and_then(Value::as_array) {
                for block in results {
                    lines.push(block_text(block));
                }
            }

            let has_more = body
                .get("has_more")
                .and_then(Value::as_bool)
                .unwrap_or(false);
            cursor = body
                .get("next_cursor")
                .and_then(Value::as_str)
                .map(str::to_string);
            if !has_more || cursor.is_none() {
                break;
            }
        }

        Ok(lines.join("\n"))
    }

    async fn deserialize<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FeedbackError::notion_api(format!(
                "backend returned {status}: {body}"
            )));
        }
        Ok(response.json::<T>().await?)
    }
}

/// 从任意块类型中提取富文本的纯文本
fn block_text(block: &Value) -> String {
    let Some(block_type) = block.get("type").and_then(Value::as_str) else {
        return String::new();
    };
    let Some(rich_text) = block
        .get(block_type)
        .and_then(|content| content.get("rich_text"))
        .and_then(Value::as_array)
    else {
        return String::new();
    };

    rich_text
        .iter()
        .filter_map(|segment| segment.get("plain_text").and_then(Value::as_str))
        .collect::<Vec<_>>()
        .concat()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_text_extracts_plain_text() {
        let block = json!({
            "type": "paragraph",
            "paragraph": {
                "rich_text": [
                    { "plain_text": "Hola " },
                    { "plain_text": "mundo" },
                ]
            }
        });

        assert_eq!(block_text(&block), "Hola mundo");
    }

    #[test]
    fn test_block_text_handles_blocks_without_text() {
        assert_eq!(block_text(&json!({ "type": "divider", "divider": {} })), "");
        assert_eq!(block_text(&json!({})), "");
    }

    #[test]
    fn test_page_deserializes_ignoring_unknown_property_kinds() {
        let page: Page = serde_json::from_value(json!({
            "id": "p1",
            "properties": {
                "Nombre": {
                    "id": "abc",
                    "type": "title",
                    "title": [{ "plain_text": "Grupo 1" }]
                },
                "Estado": { "id": "def", "type": "status" }
            }
        }))
        .unwrap();

        assert_eq!(page.id, "p1");
        let name = &page.properties["Nombre"];
        assert!(name.title.is_some());
        assert!(page.properties["Estado"].title.is_none());
    }
}
