use serde::{Deserialize, Serialize};

/// 默认每页数量
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// ListOptions 用于分页查询
/// 页码从1开始
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListOptions {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl ListOptions {
    pub fn new(page: Option<u32>) -> Self {
        Self { page, size: None }
    }

    /// 当前页码（缺省或为0时返回第一页）
    pub fn page(&self) -> u32 {
        self.page.filter(|p| *p > 0).unwrap_or(1)
    }

    /// 每页数量
    pub fn size(&self) -> u32 {
        self.size.filter(|s| *s > 0).unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// 转换为从0开始的页索引（供ORM分页器使用）
    pub fn page_index(&self) -> u64 {
        u64::from(self.page() - 1)
    }
}

/// ListResult 包含分页查询结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub size: u32,
    #[serde(rename = "totalPages")]
    pub total_pages: u64,
}

impl<T> ListResult<T> {
    pub fn new(items: Vec<T>, total: u64, page: u32, size: u32) -> Self {
        let total_pages = if size == 0 {
            0
        } else {
            total.div_ceil(u64::from(size))
        };
        Self {
            items,
            total,
            page,
            size,
            total_pages,
        }
    }
}
