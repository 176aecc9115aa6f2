// src/domain/content/services.rs
use std::sync::Arc;

use crate::domain::content::kind::ContentKind;
use crate::domain::content::repository::ContentReadRepository;
use crate::domain::content::slug_assignment::{SlugCandidates, explicit_requested};
use crate::domain::content::value_objects::{ContentId, ContentSlug, ContentTitle};
use crate::domain::errors::DomainResult;

/// Where a resolved slug came from. Only derived slugs may be re-derived
/// after a commit-time conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlugOrigin {
    Explicit,
    Derived,
}

/// Domain service responsible for producing unique slugs for content items.
pub struct ContentSlugService {
    read_repo: Arc<dyn ContentReadRepository>,
}

impl ContentSlugService {
    pub fn new(read_repo: Arc<dyn ContentReadRepository>) -> Self {
        Self { read_repo }
    }

    /// Uses a non-empty `explicit` slug unchanged, otherwise derives one.
    /// A slug held by `ignore_id` counts as free.
    pub async fn resolve(
        &self,
        kind: ContentKind,
        title: &ContentTitle,
        explicit: Option<&str>,
        ignore_id: Option<ContentId>,
    ) -> DomainResult<(ContentSlug, SlugOrigin)> {
        if let Some(explicit) = explicit_requested(explicit) {
            return Ok((ContentSlug::new(explicit)?, SlugOrigin::Explicit));
        }
        let slug = self.generate_unique_slug(kind, title, ignore_id).await?;
        Ok((slug, SlugOrigin::Derived))
    }

    pub async fn generate_unique_slug(
        &self,
        kind: ContentKind,
        title: &ContentTitle,
        ignore_id: Option<ContentId>,
    ) -> DomainResult<ContentSlug> {
        let mut candidates = SlugCandidates::for_title(title.as_str(), kind.as_str());

        loop {
            let slug = ContentSlug::new(candidates.advance())?;
            if !self.is_taken(kind, &slug, ignore_id).await? {
                return Ok(slug);
            }
            tracing::debug!(%kind, slug = %slug, "slug taken, probing next candidate");
        }
    }

    async fn is_taken(
        &self,
        kind: ContentKind,
        slug: &ContentSlug,
        ignore_id: Option<ContentId>,
    ) -> DomainResult<bool> {
        match ignore_id {
            None => self.read_repo.slug_exists(kind, slug).await,
            Some(id) => Ok(self
                .read_repo
                .find_by_slug(kind, slug)
                .await?
                .is_some_and(|existing| existing.id != id)),
        }
    }
}
