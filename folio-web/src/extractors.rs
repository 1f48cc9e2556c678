pub mod multipart_with_actor;
pub mod project_submission;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use folio_api::Actor;
use std::convert::Infallible;

/// 当前操作者提取器
/// 从请求扩展中提取上游认证层放入的 `Actor`，没有时视为匿名
pub struct CurrentActor(pub Actor);

#[async_trait::async_trait]
impl<S> FromRequestParts<S> for CurrentActor
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let actor = parts
            .extensions
            .get::<Actor>()
            .cloned()
            .unwrap_or_else(Actor::anonymous);
        Ok(CurrentActor(actor))
    }
}
