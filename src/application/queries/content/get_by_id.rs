use super::ContentQueryService;
use crate::{
    application::{
        dto::ContentItemDto,
        error::{ApplicationError, ApplicationResult},
        queries::visibility::can_view,
    },
    domain::{access::Actor, content::ContentId},
};
use uuid::Uuid;

pub struct GetContentByIdQuery {
    pub id: Uuid,
}

impl ContentQueryService {
    pub async fn get_content_by_id(
        &self,
        actor: Option<&Actor>,
        query: GetContentByIdQuery,
    ) -> ApplicationResult<ContentItemDto> {
        let item = self
            .read_repo
            .find_by_id(ContentId::from_uuid(query.id))
            .await?
            .filter(|item| can_view(actor, item))
            .ok_or_else(|| ApplicationError::not_found("content not found"))?;

        Ok(item.into())
    }
}
