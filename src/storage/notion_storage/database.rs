//! 类型化集合访问
//!
//! Database 用 Schema 把一个后端集合包装成某个实体类型的
//! 查询 / 创建 / 更新接口。

use std::marker::PhantomData;
use std::sync::Arc;

use crate::errors::Result;
use crate::models::feedbacks::Identified;

use super::client::NotionClient;
use super::properties::PropertyValue;
use super::schema::{NotionRecord, Schema};

pub struct Database<T: NotionRecord> {
    client: Arc<NotionClient>,
    database_id: String,
    schema: Schema,
    _record: PhantomData<T>,
}

impl<T: NotionRecord> Database<T> {
    pub fn new(client: Arc<NotionClient>, database_id: impl Into<String>, schema: Schema) -> Self {
        Self {
            client,
            database_id: database_id.into(),
            schema,
            _record: PhantomData,
        }
    }

    /// 按条件查询：同字段多值 OR，字段间 AND，翻完所有分页
    pub async fn query(
        &self,
        criteria: &[(String, Vec<PropertyValue>)],
    ) -> Result<Vec<Identified<T>>> {
        let filter = self.schema.filter(criteria)?;
        let mut records = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let response = self
                .client
                .query_database(&self.database_id, filter.as_ref(), cursor.as_deref())
                .await?;
            for page in &response.results {
                records.push(self.schema.decode(page)?);
            }
            cursor = response.next_cursor;
            if !response.has_more || cursor.is_none() {
                break;
            }
        }

        Ok(records)
    }

    /// 逐条创建记录，返回解码后的持久化结果
    pub async fn create(&self, records: Vec<T>) -> Result<Vec<Identified<T>>> {
        let mut created = Vec::with_capacity(records.len());
        for record in &records {
            let properties = self.schema.encode(record)?;
            let page = self.client.create_page(&self.database_id, properties).await?;
            created.push(self.schema.decode(&page)?);
        }
        Ok(created)
    }

    /// 逐条更新记录（按既有 id），返回解码后的结果
    pub async fn update(&self, records: Vec<Identified<T>>) -> Result<Vec<Identified<T>>> {
        let mut updated = Vec::with_capacity(records.len());
        for record in &records {
            let properties = self.schema.encode(&record.record)?;
            let page = self.client.update_page(&record.id, properties).await?;
            updated.push(self.schema.decode(&page)?);
        }
        Ok(updated)
    }
}
