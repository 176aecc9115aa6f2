use super::ContentQueryService;
use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
        queries::visibility::can_view,
    },
    domain::{
        access::Actor,
        content::{ContentId, ContentKind},
    },
};
use uuid::Uuid;

pub struct ListCommentsQuery {
    pub prompt_id: Uuid,
}

impl ContentQueryService {
    pub async fn list_comments(
        &self,
        actor: Option<&Actor>,
        query: ListCommentsQuery,
    ) -> ApplicationResult<Vec<CommentDto>> {
        let prompt_id = ContentId::from_uuid(query.prompt_id);
        self.read_repo
            .find_by_id(prompt_id)
            .await?
            .filter(|item| item.kind == ContentKind::Prompt && can_view(actor, item))
            .ok_or_else(|| ApplicationError::not_found("prompt not found"))?;

        let comments = self.comment_repo.list_for_prompt(prompt_id).await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }
}
