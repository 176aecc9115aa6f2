// tests/slug_race_retry.rs
//! Two creators probing the same slug at once: the probe says "free", the
//! write finds it taken. These tests play the losing writer.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use http::Method;

mod support;

use promptbase_core::application::commands::content::{
    ContentSettings, CreateContentCommand, UpdateContentCommand,
};
use promptbase_core::application::dto::ContentItemDto;
use promptbase_core::domain::access::Actor;
use promptbase_core::application::error::ApplicationError;
use promptbase_core::application::services::ApplicationServices;
use promptbase_core::domain::content::{
    ContentId, ContentItem, ContentKind, ContentReadRepository, ContentSlug,
};
use promptbase_core::domain::errors::{DomainError, DomainResult};
use promptbase_core::infrastructure::repositories::InMemoryStore;
use support::{Harness, as_actor, services_over};

/// Answers the first `stale_probes` slug lookups as if the slug were free.
struct StaleProbes {
    inner: InMemoryStore,
    stale_probes: usize,
    probes: AtomicUsize,
}

impl StaleProbes {
    fn is_stale(&self) -> bool {
        self.probes.fetch_add(1, Ordering::SeqCst) < self.stale_probes
    }
}

#[async_trait]
impl ContentReadRepository for StaleProbes {
    async fn find_by_id(&self, id: ContentId) -> DomainResult<Option<ContentItem>> {
        self.inner.find_by_id(id).await
    }

    async fn find_by_slug(
        &self,
        kind: ContentKind,
        slug: &ContentSlug,
    ) -> DomainResult<Option<ContentItem>> {
        if self.is_stale() {
            return Ok(None);
        }
        self.inner.find_by_slug(kind, slug).await
    }

    async fn slug_exists(&self, kind: ContentKind, slug: &ContentSlug) -> DomainResult<bool> {
        if self.is_stale() {
            return Ok(false);
        }
        self.inner.slug_exists(kind, slug).await
    }

    async fn list(
        &self,
        kind: ContentKind,
        include_unpublished: bool,
    ) -> DomainResult<Vec<ContentItem>> {
        self.inner.list(kind, include_unpublished).await
    }
}

/// Services over `existing`'s data whose first slug probes are stale.
fn racing_services(
    existing: &Harness,
    stale_probes: usize,
    slug_max_attempts: u32,
) -> Arc<ApplicationServices> {
    let read_repo = Arc::new(StaleProbes {
        inner: existing.store.clone(),
        stale_probes,
        probes: AtomicUsize::new(0),
    });
    services_over(
        existing.store.clone(),
        read_repo,
        ContentSettings {
            slug_max_attempts,
            default_published: true,
        },
    )
}

fn my_post() -> CreateContentCommand {
    CreateContentCommand::builder(ContentKind::Prompt)
        .title("My Post")
        .body("Body")
        .build()
        .unwrap()
}

#[tokio::test]
async fn conflict_on_derived_slug_is_retried() {
    let h = Harness::new().await;
    let alice = h.member("alice").await;
    let winner = h.create(alice, ContentKind::Prompt, "My Post").await;
    assert_eq!(winner.slug, "my-post");

    let racing = racing_services(&h, 1, 3);
    let loser = racing
        .content_commands
        .create_content(&as_actor(Method::POST, h.root), my_post())
        .await
        .unwrap();

    assert_eq!(loser.slug, "my-post-1");
}

#[tokio::test]
async fn retries_stop_after_the_configured_attempts() {
    let h = Harness::new().await;
    h.create(h.root, ContentKind::Prompt, "My Post").await;

    // Every probe lies, so every insert collides.
    let racing = racing_services(&h, usize::MAX, 2);
    let err = racing
        .content_commands
        .create_content(&as_actor(Method::POST, h.root), my_post())
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Domain(DomainError::Conflict(_))));
}

#[tokio::test]
async fn single_attempt_surfaces_the_conflict() {
    let h = Harness::new().await;
    h.create(h.root, ContentKind::Prompt, "My Post").await;

    let racing = racing_services(&h, 1, 1);
    let err = racing
        .content_commands
        .create_content(&as_actor(Method::POST, h.root), my_post())
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Domain(DomainError::Conflict(_))));
}

#[tokio::test]
async fn explicit_slugs_are_never_retried() {
    let h = Harness::new().await;
    h.create(h.root, ContentKind::Prompt, "My Post").await;

    let racing = racing_services(&h, 0, 5);
    let command = CreateContentCommand::builder(ContentKind::Prompt)
        .title("Something else")
        .body("Body")
        .slug("my-post")
        .build()
        .unwrap();
    let err = racing
        .content_commands
        .create_content(&as_actor(Method::POST, h.root), command)
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Domain(DomainError::Conflict(_))));
}

/// `owner` holds a "Target" prompt slugged "custom"; someone else already
/// holds "target".
async fn retitled_twin(h: &Harness, owner: Actor) -> ContentItemDto {
    h.create(h.root, ContentKind::Prompt, "Target").await;
    let command = CreateContentCommand::builder(ContentKind::Prompt)
        .title("Target")
        .body("Body")
        .slug("custom")
        .build()
        .unwrap();
    h.services
        .content_commands
        .create_content(&as_actor(Method::POST, owner), command)
        .await
        .unwrap()
}

fn rederive(id: uuid::Uuid) -> UpdateContentCommand {
    UpdateContentCommand {
        id,
        slug: Some(String::new()),
        ..Default::default()
    }
}

#[tokio::test]
async fn rederived_slug_on_update_is_retried() {
    let h = Harness::new().await;
    let alice = h.member("alice").await;
    let item = retitled_twin(&h, alice).await;

    let racing = racing_services(&h, 1, 3);
    let updated = racing
        .content_commands
        .update_content(&as_actor(Method::PATCH, alice), rederive(item.id))
        .await
        .unwrap();

    assert_eq!(updated.slug, "target-1");
}

#[tokio::test]
async fn update_retries_are_bounded_too() {
    let h = Harness::new().await;
    let alice = h.member("alice").await;
    let item = retitled_twin(&h, alice).await;

    let racing = racing_services(&h, usize::MAX, 2);
    let err = racing
        .content_commands
        .update_content(&as_actor(Method::PATCH, alice), rederive(item.id))
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Domain(DomainError::Conflict(_))));
}
