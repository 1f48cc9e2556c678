use super::UploadedFile;
use std::collections::HashSet;

/// 文件类型验证器
pub struct FileTypeValidator {
    /// 允许的MIME类型集合
    allowed_types: HashSet<String>,
    /// 允许的文件扩展名集合
    allowed_extensions: HashSet<String>,
    /// 最大文件大小（字节），None表示不限制
    max_size: Option<usize>,
}

impl FileTypeValidator {
    /// 创建新的验证器
    pub fn new() -> Self {
        Self {
            allowed_types: HashSet::new(),
            allowed_extensions: HashSet::new(),
            max_size: None,
        }
    }

    /// 添加常见的图片类型
    pub fn allow_images(mut self) -> Self {
        // svg可携带脚本，不在图片白名单内
        for mime in ["image/jpeg", "image/png", "image/gif", "image/webp", "image/bmp"] {
            self.allowed_types.insert(mime.to_string());
        }
        for ext in ["jpg", "jpeg", "png", "gif", "webp", "bmp"] {
            self.allowed_extensions.insert(ext.to_string());
        }
        self
    }

    /// 限制最大文件大小
    pub fn max_size(mut self, bytes: usize) -> Self {
        self.max_size = Some(bytes);
        self
    }

    /// 验证文件类型
    ///
    /// 存储时沿用原始文件名的扩展名，因此扩展名必须在白名单内；
    /// 客户端声明了MIME类型时也必须匹配。
    pub fn validate(&self, mime_type: Option<&str>, filename: &str) -> bool {
        let extension_allowed = match filename.rsplit_once('.') {
            Some((_, ext)) => self.allowed_extensions.contains(&ext.to_lowercase()),
            None => false,
        };
        let mime_allowed = mime_type.map_or(true, |mime| self.allowed_types.contains(mime));
        extension_allowed && mime_allowed
    }

    /// 验证上传文件：非空、大小和类型
    pub fn accepts(&self, file: &UploadedFile) -> bool {
        if file.is_empty() {
            return false;
        }
        if let Some(max) = self.max_size {
            if file.size() > max {
                return false;
            }
        }
        self.validate(file.content_type.as_deref(), &file.filename)
    }
}

impl Default for FileTypeValidator {
    fn default() -> Self {
        Self::new()
    }
}
