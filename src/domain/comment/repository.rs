use crate::domain::comment::entity::{Comment, NewComment};
use crate::domain::comment::value_objects::{CommentBody, CommentId};
use crate::domain::content::ContentId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Fails with `NotFound` when the parent prompt is gone.
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>>;
    async fn update_body(
        &self,
        id: CommentId,
        body: CommentBody,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Comment>;
    async fn delete(&self, id: CommentId) -> DomainResult<()>;
    /// Comments on a prompt, oldest first.
    async fn list_for_prompt(&self, prompt_id: ContentId) -> DomainResult<Vec<Comment>>;
}
