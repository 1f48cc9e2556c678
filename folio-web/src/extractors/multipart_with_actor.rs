use axum::extract::{FromRequest, Multipart};
use axum::response::{IntoResponse, Response};
use folio_api::Actor;

/// Multipart和操作者的组合提取器
pub struct MultipartWithActor {
    pub multipart: Multipart,
    pub actor: Actor,
}

#[async_trait::async_trait]
impl<S> FromRequest<S> for MultipartWithActor
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: axum::extract::Request, state: &S) -> Result<Self, Self::Rejection> {
        // 先提取操作者（从请求扩展中）
        let actor = req
            .extensions()
            .get::<Actor>()
            .cloned()
            .unwrap_or_else(Actor::anonymous);

        let multipart = Multipart::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        Ok(MultipartWithActor { multipart, actor })
    }
}
