use crate::domain::comment::value_objects::{CommentBody, CommentId};
use crate::domain::content::{ContentId, Timestamps};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// A reader's comment attached to a prompt.
#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub prompt_id: ContentId,
    pub author_id: UserId,
    pub body: CommentBody,
    pub timestamps: Timestamps,
}

impl Comment {
    pub fn set_body(&mut self, body: CommentBody, now: DateTime<Utc>) {
        self.body = body;
        self.timestamps.touch(now);
    }
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub id: CommentId,
    pub prompt_id: ContentId,
    pub author_id: UserId,
    pub body: CommentBody,
    pub timestamps: Timestamps,
}

impl NewComment {
    pub fn new(
        prompt_id: ContentId,
        author_id: UserId,
        body: CommentBody,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: CommentId::generate(),
            prompt_id,
            author_id,
            body,
            timestamps: Timestamps::new(now),
        }
    }

    pub fn into_comment(self) -> Comment {
        Comment {
            id: self.id,
            prompt_id: self.prompt_id,
            author_id: self.author_id,
            body: self.body,
            timestamps: self.timestamps,
        }
    }
}
