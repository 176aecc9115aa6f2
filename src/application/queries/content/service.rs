use std::sync::Arc;

use crate::domain::{comment::CommentRepository, content::ContentReadRepository};

pub struct ContentQueryService {
    pub(super) read_repo: Arc<dyn ContentReadRepository>,
    pub(super) comment_repo: Arc<dyn CommentRepository>,
}

impl ContentQueryService {
    pub fn new(
        read_repo: Arc<dyn ContentReadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            read_repo,
            comment_repo,
        }
    }
}
