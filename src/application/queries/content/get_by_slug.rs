use super::ContentQueryService;
use crate::{
    application::{
        dto::ContentItemDto,
        error::{ApplicationError, ApplicationResult},
        queries::visibility::can_view,
    },
    domain::{
        access::Actor,
        content::{ContentKind, ContentSlug},
    },
};

pub struct GetContentBySlugQuery {
    pub kind: ContentKind,
    pub slug: String,
}

impl ContentQueryService {
    pub async fn get_content_by_slug(
        &self,
        actor: Option<&Actor>,
        query: GetContentBySlugQuery,
    ) -> ApplicationResult<ContentItemDto> {
        let slug = ContentSlug::new(query.slug)?;
        let item = self
            .read_repo
            .find_by_slug(query.kind, &slug)
            .await?
            .filter(|item| can_view(actor, item))
            .ok_or_else(|| ApplicationError::not_found("content not found"))?;

        Ok(item.into())
    }
}
