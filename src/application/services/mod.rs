// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            comments::CommentCommandService,
            content::{ContentCommandService, ContentSettings},
            users::UserCommandService,
        },
        ports::time::Clock,
        queries::content::ContentQueryService,
    },
    domain::{
        comment::CommentRepository,
        content::{ContentReadRepository, ContentWriteRepository, services::ContentSlugService},
        user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub content_commands: Arc<ContentCommandService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub content_queries: Arc<ContentQueryService>,
}

impl ApplicationServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        content_write_repo: Arc<dyn ContentWriteRepository>,
        content_read_repo: Arc<dyn ContentReadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        clock: Arc<dyn Clock>,
        settings: ContentSettings,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&clock),
        ));

        let slug_service = Arc::new(ContentSlugService::new(Arc::clone(&content_read_repo)));

        let content_commands = Arc::new(ContentCommandService::new(
            Arc::clone(&content_write_repo),
            Arc::clone(&content_read_repo),
            slug_service,
            Arc::clone(&clock),
            settings,
        ));

        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&comment_repo),
            Arc::clone(&content_read_repo),
            Arc::clone(&clock),
        ));

        let content_queries = Arc::new(ContentQueryService::new(
            Arc::clone(&content_read_repo),
            Arc::clone(&comment_repo),
        ));

        Self {
            user_commands,
            content_commands,
            comment_commands,
            content_queries,
        }
    }

    pub fn user_commands(&self) -> Arc<UserCommandService> {
        Arc::clone(&self.user_commands)
    }

    pub fn content_commands(&self) -> Arc<ContentCommandService> {
        Arc::clone(&self.content_commands)
    }

    pub fn comment_commands(&self) -> Arc<CommentCommandService> {
        Arc::clone(&self.comment_commands)
    }

    pub fn content_queries(&self) -> Arc<ContentQueryService> {
        Arc::clone(&self.content_queries)
    }
}
