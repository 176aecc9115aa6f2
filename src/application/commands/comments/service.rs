// src/application/commands/comments/service.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::access::ensure_allowed,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        access::{AccessRequest, AccessRule, CommentOwnerOrParentAuthor, CommentTarget},
        comment::{Comment, CommentId, CommentRepository},
        content::ContentReadRepository,
    },
};

pub struct CommentCommandService {
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) content_repo: Arc<dyn ContentReadRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        content_repo: Arc<dyn ContentReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            comment_repo,
            content_repo,
            clock,
        }
    }

    /// Loads a comment and checks the request against it and its prompt.
    pub(super) async fn load_for_write(
        &self,
        request: &AccessRequest,
        id: CommentId,
    ) -> ApplicationResult<Comment> {
        let comment = self
            .comment_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("comment not found"))?;

        let prompt = self
            .content_repo
            .find_by_id(comment.prompt_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("prompt not found"))?;

        let target = CommentTarget::new(&comment, prompt.author_id);
        let allowed = CommentOwnerOrParentAuthor.has_object_permission(request, &target);
        ensure_allowed(request, allowed, "not allowed to change this comment")?;

        Ok(comment)
    }
}
