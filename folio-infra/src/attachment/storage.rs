use super::{BlobKey, BlobStore, StorageError};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

const FALLBACK_EXTENSION: &str = "bin";

/// 本地文件存储实现
pub struct LocalBlobStore {
    base_path: PathBuf,
}

impl LocalBlobStore {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    /// 构建完整文件路径，拒绝逃逸出根目录的key
    fn build_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        let relative = Path::new(key);
        let is_safe = !key.is_empty()
            && relative
                .components()
                .all(|component| matches!(component, Component::Normal(_)));
        if !is_safe {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.base_path.join(relative))
    }
}

/// 从原始文件名提取扩展名
fn extension_of(original_name: &str) -> String {
    Path::new(original_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .unwrap_or_else(|| FALLBACK_EXTENSION.to_string())
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    async fn store(&self, content: &[u8], namespace: &str, original_name: &str) -> Result<BlobKey, StorageError> {
        let name = format!("{}.{}", Uuid::new_v4().simple(), extension_of(original_name));
        let key = format!("{}/{}", namespace.trim_matches('/'), name);
        let full_path = self.build_path(&key)?;

        // 创建父目录
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        fs::write(&full_path, content).await?;
        tracing::debug!("Stored blob {} ({} bytes)", key, content.len());
        Ok(BlobKey::new(key))
    }

    async fn read(&self, key: &BlobKey) -> Result<Vec<u8>, StorageError> {
        let full_path = self.build_path(key.as_str())?;
        match fs::read(&full_path).await {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(StorageError::NotFound(key.to_string())),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, key: &BlobKey) -> Result<(), StorageError> {
        let full_path = self.build_path(key.as_str())?;
        match fs::remove_file(&full_path).await {
            Ok(()) => {
                tracing::debug!("Deleted blob {}", key);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    async fn exists(&self, key: &BlobKey) -> Result<bool, StorageError> {
        let full_path = self.build_path(key.as_str())?;
        Ok(fs::try_exists(&full_path).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_store() -> (TempDir, LocalBlobStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = LocalBlobStore::new(temp_dir.path().to_path_buf());
        (temp_dir, store)
    }

    #[tokio::test]
    async fn test_store_and_read() {
        let (_temp_dir, store) = create_store();

        let key = store.store(b"png bytes", "project_images", "Cover.PNG").await.unwrap();
        assert!(key.as_str().starts_with("project_images/"));
        assert!(key.as_str().ends_with(".png"));

        assert!(store.exists(&key).await.unwrap());
        assert_eq!(store.read(&key).await.unwrap(), b"png bytes");
    }

    #[tokio::test]
    async fn test_store_generates_unique_keys() {
        let (_temp_dir, store) = create_store();

        let first = store.store(b"a", "project_images", "same.jpg").await.unwrap();
        let second = store.store(b"b", "project_images", "same.jpg").await.unwrap();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let (_temp_dir, store) = create_store();

        let key = store.store(b"data", "project_images", "a.gif").await.unwrap();
        store.delete(&key).await.unwrap();
        assert!(!store.exists(&key).await.unwrap());

        // 再次删除不报错
        store.delete(&key).await.unwrap();
        store.delete(&BlobKey::new("project_images/never-existed.png")).await.unwrap();
    }

    #[tokio::test]
    async fn test_read_missing_blob() {
        let (_temp_dir, store) = create_store();

        let result = store.read(&BlobKey::new("project_images/missing.png")).await;
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_rejects_escaping_keys() {
        let (_temp_dir, store) = create_store();

        for key in ["../secret", "/etc/passwd", "", "a/../../b"] {
            let result = store.read(&BlobKey::new(key)).await;
            assert!(matches!(result, Err(StorageError::InvalidKey(_))), "key {:?}", key);
        }
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("photo.JPeG"), "jpeg");
        assert_eq!(extension_of("archive.tar.gz"), "gz");
        assert_eq!(extension_of("no_extension"), "bin");
        assert_eq!(extension_of("weird.p?g"), "bin");
    }
}
