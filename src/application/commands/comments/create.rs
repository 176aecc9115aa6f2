use super::CommentCommandService;
use crate::{
    application::{
        commands::access::{ensure_authenticated, ensure_method},
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
        queries::visibility::can_view,
    },
    domain::{
        access::AccessRequest,
        comment::{CommentBody, NewComment},
        content::{ContentId, ContentKind},
    },
};
use http::Method;
use uuid::Uuid;

pub struct CreateCommentCommand {
    pub prompt_id: Uuid,
    pub body: String,
}

impl CommentCommandService {
    pub async fn create_comment(
        &self,
        request: &AccessRequest,
        command: CreateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        ensure_method(request, &[Method::POST])?;
        let actor = ensure_authenticated(request)?;

        let prompt_id = ContentId::from_uuid(command.prompt_id);
        let prompt = self
            .content_repo
            .find_by_id(prompt_id)
            .await?
            .filter(|item| item.kind == ContentKind::Prompt)
            .filter(|item| can_view(Some(&actor), item))
            .ok_or_else(|| ApplicationError::not_found("prompt not found"))?;

        let body = CommentBody::new(command.body)?;
        let comment = NewComment::new(prompt.id, actor.id, body, self.clock.now());
        let created = self.comment_repo.insert(comment).await?;

        tracing::info!(comment = %created.id, prompt = %prompt.id, "comment created");
        Ok(created.into())
    }
}
