use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::template::TaskTemplateDto;

pub const DEFAULT_PAGE_SIZE: i64 = 20;
pub const MAX_PAGE_SIZE: i64 = 500;

/// 模板搜索参数
#[derive(Debug, Clone, Deserialize, ToSchema, IntoParams)]
pub struct SearchQuery {
    /// 名称需包含的子串（区分大小写）
    #[serde(default)]
    pub keywords: Option<String>,
    /// 页码，从 1 开始
    #[serde(default = "default_page")]
    pub page: i64,
    /// 每页条数；0 表示使用配置的默认值
    #[serde(default)]
    pub rows: i64,
}

fn default_page() -> i64 {
    1
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            keywords: None,
            page: default_page(),
            rows: 0,
        }
    }
}

impl SearchQuery {
    /// 关键字为空或全是空白时返回 `None`
    pub fn keyword(&self) -> Option<&str> {
        self.keywords.as_deref().filter(|kw| !kw.trim().is_empty())
    }

    pub fn page(&self) -> i64 {
        self.page.max(1)
    }

    pub fn rows(&self, default_rows: i64) -> i64 {
        let rows = if self.rows < 1 { default_rows } else { self.rows };
        rows.clamp(1, MAX_PAGE_SIZE)
    }

    /// 超大页码饱和到 `i64::MAX`，查询结果为空页
    pub fn offset(&self, default_rows: i64) -> i64 {
        (self.page() - 1).saturating_mul(self.rows(default_rows))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[aliases(TemplatePage = PagedResult<TaskTemplateDto>)]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub rows: i64,
    pub total_pages: i64,
}

impl<T> PagedResult<T> {
    pub fn new(items: Vec<T>, total: i64, page: i64, rows: i64) -> Self {
        let total_pages = if rows > 0 { (total + rows - 1) / rows } else { 0 };
        Self {
            items,
            total,
            page,
            rows,
            total_pages,
        }
    }
}
