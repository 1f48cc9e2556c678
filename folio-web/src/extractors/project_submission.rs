use crate::error::ApiError;
use axum::extract::Multipart;
use folio_domain::{ProjectForm, ValidationFailure};
use folio_infra::UploadedFile;
use folio_service::{ProjectError, ProjectSubmission};

/// 新建表单中的图片字段
pub const CREATE_IMAGE_FIELD: &str = "image";
/// 编辑表单中的图片字段
pub const UPDATE_IMAGE_FIELD: &str = "new_image";

/// 从multipart表单读取项目提交
///
/// - `type_id` 为空表示不设置类型
/// - `technologies` / `technologies[]` 出现即表示提交了技术列表，空值只标记存在
/// - 文件名或内容为空的文件字段视为没有上传
pub async fn read_submission(mut multipart: Multipart, image_field: &str) -> Result<ProjectSubmission, ApiError> {
    let mut title = String::new();
    let mut type_id = None;
    let mut technologies: Option<Vec<i32>> = None;
    let mut image = None;
    let mut malformed = ValidationFailure::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "title" => title = field.text().await?,
            "type_id" => {
                let raw = field.text().await?;
                match parse_id(&raw) {
                    Ok(id) => type_id = id,
                    Err(()) => malformed.add("type_id", "must be an integer id"),
                }
            }
            "technologies" | "technologies[]" => {
                let raw = field.text().await?;
                let ids = technologies.get_or_insert_with(Vec::new);
                match parse_id(&raw) {
                    Ok(Some(id)) => ids.push(id),
                    Ok(None) => {}
                    Err(()) => malformed.add("technologies", "must contain integer ids"),
                }
            }
            _ if name == image_field => {
                let filename = field.file_name().unwrap_or("").to_string();
                let content_type = field.content_type().map(str::to_string);
                let content = field.bytes().await?.to_vec();
                let upload = UploadedFile::new(filename, content_type, content);
                if !upload.is_empty() {
                    image = Some(upload);
                }
            }
            _ => {
                tracing::debug!("Ignoring unexpected form field {:?}", name);
            }
        }
    }

    if !malformed.is_empty() {
        return Err(ProjectError::Validation(malformed).into());
    }

    Ok(ProjectSubmission {
        form: ProjectForm::new(title, type_id),
        image,
        technologies,
    })
}

/// 空白为 `None`，非整数为错误
fn parse_id(raw: &str) -> Result<Option<i32>, ()> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse().map(Some).map_err(|_| ())
}
