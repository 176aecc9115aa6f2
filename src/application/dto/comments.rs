use crate::domain::comment::Comment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentDto {
    pub id: Uuid,
    pub prompt_id: Uuid,
    pub author_id: Uuid,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.as_uuid(),
            prompt_id: comment.prompt_id.into(),
            author_id: comment.author_id.into(),
            body: comment.body.into(),
            created_at: comment.timestamps.created_at(),
            updated_at: comment.timestamps.updated_at(),
        }
    }
}
