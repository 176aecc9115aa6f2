use super::CommentCommandService;
use crate::{
    application::{commands::access::ensure_method, error::ApplicationResult},
    domain::{access::AccessRequest, comment::CommentId},
};
use http::Method;
use uuid::Uuid;

pub struct DeleteCommentCommand {
    pub id: Uuid,
}

impl CommentCommandService {
    pub async fn delete_comment(
        &self,
        request: &AccessRequest,
        command: DeleteCommentCommand,
    ) -> ApplicationResult<()> {
        ensure_method(request, &[Method::DELETE])?;

        let comment = self
            .load_for_write(request, CommentId::from_uuid(command.id))
            .await?;
        self.comment_repo.delete(comment.id).await?;

        tracing::info!(comment = %comment.id, prompt = %comment.prompt_id, "comment deleted");
        Ok(())
    }
}
