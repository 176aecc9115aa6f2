use super::ContentQueryService;
use crate::{
    application::{dto::ContentItemDto, error::ApplicationResult, queries::visibility::can_view},
    domain::{access::Actor, content::ContentKind},
};

pub struct ListContentQuery {
    pub kind: ContentKind,
}

impl ContentQueryService {
    /// Newest first. Anonymous readers only ever see published items.
    pub async fn list_content(
        &self,
        actor: Option<&Actor>,
        query: ListContentQuery,
    ) -> ApplicationResult<Vec<ContentItemDto>> {
        let records = self.read_repo.list(query.kind, actor.is_some()).await?;

        Ok(records
            .into_iter()
            .filter(|item| can_view(actor, item))
            .map(Into::into)
            .collect())
    }
}
