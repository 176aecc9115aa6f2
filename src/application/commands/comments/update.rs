use super::CommentCommandService;
use crate::{
    application::{commands::access::ensure_method, dto::CommentDto, error::ApplicationResult},
    domain::{
        access::AccessRequest,
        comment::{CommentBody, CommentId},
    },
};
use http::Method;
use uuid::Uuid;

pub struct UpdateCommentCommand {
    pub id: Uuid,
    pub body: String,
}

impl CommentCommandService {
    pub async fn update_comment(
        &self,
        request: &AccessRequest,
        command: UpdateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        ensure_method(request, &[Method::PUT, Method::PATCH])?;

        let comment = self
            .load_for_write(request, CommentId::from_uuid(command.id))
            .await?;
        let body = CommentBody::new(command.body)?;

        let updated = self
            .comment_repo
            .update_body(comment.id, body, self.clock.now())
            .await?;
        Ok(updated.into())
    }
}
