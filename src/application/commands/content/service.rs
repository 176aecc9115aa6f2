// src/application/commands/content/service.rs
use std::future::Future;
use std::sync::Arc;

use crate::{
    application::{error::ApplicationResult, ports::time::Clock},
    domain::{
        content::{
            ContentId, ContentItem, ContentKind, ContentReadRepository, ContentSlug, ContentTitle,
            ContentWriteRepository,
            services::{ContentSlugService, SlugOrigin},
        },
        errors::DomainResult,
    },
};

/// Tunables for content writes.
#[derive(Debug, Clone, Copy)]
pub struct ContentSettings {
    /// Insert attempts for a derived slug before a conflict is reported.
    pub slug_max_attempts: u32,
    /// `is_published` for create commands that leave it unset.
    pub default_published: bool,
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            slug_max_attempts: 3,
            default_published: true,
        }
    }
}

pub struct ContentCommandService {
    pub(super) write_repo: Arc<dyn ContentWriteRepository>,
    pub(super) read_repo: Arc<dyn ContentReadRepository>,
    pub(super) slug_service: Arc<ContentSlugService>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) settings: ContentSettings,
}

impl ContentCommandService {
    pub fn new(
        write_repo: Arc<dyn ContentWriteRepository>,
        read_repo: Arc<dyn ContentReadRepository>,
        slug_service: Arc<ContentSlugService>,
        clock: Arc<dyn Clock>,
        settings: ContentSettings,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_service,
            clock,
            settings,
        }
    }
}

impl ContentCommandService {
    /// Resolves a slug and hands it to `write`.
    ///
    /// Slug probing races with concurrent writers; storage rejects the loser
    /// with a conflict and a derived slug is then derived again, up to
    /// `slug_max_attempts` writes in total. Explicit slugs get one write.
    pub(super) async fn write_with_slug<F, Fut>(
        &self,
        kind: ContentKind,
        title: &ContentTitle,
        explicit: Option<&str>,
        ignore_id: Option<ContentId>,
        mut write: F,
    ) -> ApplicationResult<ContentItem>
    where
        F: FnMut(ContentSlug) -> Fut,
        Fut: Future<Output = DomainResult<ContentItem>>,
    {
        let max_attempts = self.settings.slug_max_attempts.max(1);

        let mut attempt = 1;
        loop {
            let (slug, origin) = self
                .slug_service
                .resolve(kind, title, explicit, ignore_id)
                .await?;

            match write(slug.clone()).await {
                Ok(item) => return Ok(item),
                Err(err)
                    if err.is_conflict()
                        && origin == SlugOrigin::Derived
                        && attempt < max_attempts =>
                {
                    tracing::warn!(
                        %kind,
                        slug = %slug,
                        attempt,
                        "slug claimed concurrently, deriving again"
                    );
                    attempt += 1;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}
