pub mod storage;
pub mod file_validator;

pub use storage::LocalBlobStore;
pub use file_validator::FileTypeValidator;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// 存储中文件的不透明标识
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlobKey(String);

impl BlobKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlobKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 存储错误
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Invalid blob key: {0}")]
    InvalidKey(String),

    #[error("Blob not found: {0}")]
    NotFound(String),

    #[error("Storage IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// 上传的文件
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub content_type: Option<String>,
    pub content: Vec<u8>,
}

impl UploadedFile {
    pub fn new(filename: impl Into<String>, content_type: Option<String>, content: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content_type,
            content,
        }
    }

    /// 浏览器未选择文件时会提交空文件名和空内容
    pub fn is_empty(&self) -> bool {
        self.filename.trim().is_empty() || self.content.is_empty()
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// 文件存储trait
///
/// `delete` 必须是幂等的：删除不存在的key不是错误。
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// 保存文件到指定命名空间，返回生成的key
    async fn store(&self, content: &[u8], namespace: &str, original_name: &str) -> Result<BlobKey, StorageError>;

    /// 读取文件
    async fn read(&self, key: &BlobKey) -> Result<Vec<u8>, StorageError>;

    /// 删除文件
    async fn delete(&self, key: &BlobKey) -> Result<(), StorageError>;

    /// 检查文件是否存在
    async fn exists(&self, key: &BlobKey) -> Result<bool, StorageError>;
}
