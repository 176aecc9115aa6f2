use crate::domain::content::entity::{ContentItem, ContentUpdate, NewContentItem};
use crate::domain::content::kind::ContentKind;
use crate::domain::content::value_objects::{ContentId, ContentSlug};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Storage writes. Implementations enforce `(kind, slug)` uniqueness at
/// commit time and report violations as `DomainError::Conflict`.
#[async_trait]
pub trait ContentWriteRepository: Send + Sync {
    async fn insert(&self, item: NewContentItem) -> DomainResult<ContentItem>;
    async fn update(&self, update: ContentUpdate) -> DomainResult<ContentItem>;
    /// Atomically bumps `views` by one and persists nothing else.
    async fn increment_views(&self, id: ContentId) -> DomainResult<u64>;
    /// Deletes the item and every comment attached to it.
    async fn delete(&self, id: ContentId) -> DomainResult<()>;
}

#[async_trait]
pub trait ContentReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ContentId) -> DomainResult<Option<ContentItem>>;
    async fn find_by_slug(
        &self,
        kind: ContentKind,
        slug: &ContentSlug,
    ) -> DomainResult<Option<ContentItem>>;
    async fn slug_exists(&self, kind: ContentKind, slug: &ContentSlug) -> DomainResult<bool>;
    /// Items of `kind`, newest first.
    async fn list(&self, kind: ContentKind, include_unpublished: bool)
    -> DomainResult<Vec<ContentItem>>;
}
