//! Process-local storage behind every repository port.
//!
//! All collections live under one lock so cascades and uniqueness checks
//! see a consistent snapshot, the way a single database transaction would.

use crate::domain::comment::{Comment, CommentBody, CommentId, CommentRepository, NewComment};
use crate::domain::content::{
    ContentId, ContentItem, ContentKind, ContentReadRepository, ContentSlug, ContentUpdate,
    ContentWriteRepository, NewContentItem,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{NewUser, User, UserId, UserRepository, Username};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct StoreState {
    users: HashMap<UserId, User>,
    content: HashMap<ContentId, ContentItem>,
    slugs: HashMap<(ContentKind, ContentSlug), ContentId>,
    comments: HashMap<CommentId, Comment>,
}

impl StoreState {
    fn remove_content(&mut self, id: ContentId) -> Option<ContentItem> {
        let item = self.content.remove(&id)?;
        self.slugs.remove(&(item.kind, item.slug.clone()));
        self.comments.retain(|_, comment| comment.prompt_id != id);
        Some(item)
    }

    fn remove_user(&mut self, id: UserId) -> Option<User> {
        let user = self.users.remove(&id)?;
        let authored: Vec<ContentId> = self
            .content
            .values()
            .filter(|item| item.author_id == id)
            .map(|item| item.id)
            .collect();
        for content_id in authored {
            self.remove_content(content_id);
        }
        self.comments.retain(|_, comment| comment.author_id != id);
        Some(user)
    }
}

/// Shared handle; clones see the same data.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<RwLock<StoreState>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn newest_first(a: &ContentItem, b: &ContentItem) -> std::cmp::Ordering {
    b.created_at()
        .cmp(&a.created_at())
        .then_with(|| b.id.as_uuid().cmp(&a.id.as_uuid()))
}

#[async_trait]
impl ContentWriteRepository for InMemoryStore {
    async fn insert(&self, item: NewContentItem) -> DomainResult<ContentItem> {
        let mut state = self.state.write().await;

        if !state.users.contains_key(&item.author_id) {
            return Err(DomainError::NotFound("author not found".into()));
        }
        if state.content.contains_key(&item.id) {
            return Err(DomainError::Conflict("content id already exists".into()));
        }
        let key = (item.kind, item.slug.clone());
        if state.slugs.contains_key(&key) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }

        let item = item.into_item();
        state.slugs.insert(key, item.id);
        state.content.insert(item.id, item.clone());
        Ok(item)
    }

    async fn update(&self, update: ContentUpdate) -> DomainResult<ContentItem> {
        let mut state = self.state.write().await;

        let (kind, current_slug) = match state.content.get(&update.id) {
            Some(item) => (item.kind, item.slug.clone()),
            None => return Err(DomainError::NotFound("content not found".into())),
        };

        if let Some(slug) = update.slug.as_ref().filter(|slug| **slug != current_slug) {
            let key = (kind, slug.clone());
            if state.slugs.contains_key(&key) {
                return Err(DomainError::Conflict("slug already exists".into()));
            }
            state.slugs.remove(&(kind, current_slug));
            state.slugs.insert(key, update.id);
        }

        let item = state
            .content
            .get_mut(&update.id)
            .ok_or_else(|| DomainError::NotFound("content not found".into()))?;
        update.apply_to(item);
        Ok(item.clone())
    }

    async fn increment_views(&self, id: ContentId) -> DomainResult<u64> {
        let mut state = self.state.write().await;
        let item = state
            .content
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound("content not found".into()))?;
        item.increment_views();
        Ok(item.views)
    }

    async fn delete(&self, id: ContentId) -> DomainResult<()> {
        let mut state = self.state.write().await;
        state
            .remove_content(id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("content not found".into()))
    }
}

#[async_trait]
impl ContentReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: ContentId) -> DomainResult<Option<ContentItem>> {
        let state = self.state.read().await;
        Ok(state.content.get(&id).cloned())
    }

    async fn find_by_slug(
        &self,
        kind: ContentKind,
        slug: &ContentSlug,
    ) -> DomainResult<Option<ContentItem>> {
        let state = self.state.read().await;
        Ok(state
            .slugs
            .get(&(kind, slug.clone()))
            .and_then(|id| state.content.get(id))
            .cloned())
    }

    async fn slug_exists(&self, kind: ContentKind, slug: &ContentSlug) -> DomainResult<bool> {
        let state = self.state.read().await;
        Ok(state.slugs.contains_key(&(kind, slug.clone())))
    }

    async fn list(
        &self,
        kind: ContentKind,
        include_unpublished: bool,
    ) -> DomainResult<Vec<ContentItem>> {
        let state = self.state.read().await;
        let mut items: Vec<ContentItem> = state
            .content
            .values()
            .filter(|item| item.kind == kind && (include_unpublished || item.is_published))
            .cloned()
            .collect();
        items.sort_by(newest_first);
        Ok(items)
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut state = self.state.write().await;

        match state.content.get(&comment.prompt_id) {
            Some(item) if item.kind == ContentKind::Prompt => {}
            _ => return Err(DomainError::NotFound("prompt not found".into())),
        }
        if !state.users.contains_key(&comment.author_id) {
            return Err(DomainError::NotFound("author not found".into()));
        }

        let comment = comment.into_comment();
        state.comments.insert(comment.id, comment.clone());
        Ok(comment)
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let state = self.state.read().await;
        Ok(state.comments.get(&id).cloned())
    }

    async fn update_body(
        &self,
        id: CommentId,
        body: CommentBody,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Comment> {
        let mut state = self.state.write().await;
        let comment = state
            .comments
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound("comment not found".into()))?;
        comment.set_body(body, updated_at);
        Ok(comment.clone())
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let mut state = self.state.write().await;
        state
            .comments
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("comment not found".into()))
    }

    async fn list_for_prompt(&self, prompt_id: ContentId) -> DomainResult<Vec<Comment>> {
        let state = self.state.read().await;
        let mut comments: Vec<Comment> = state
            .comments
            .values()
            .filter(|comment| comment.prompt_id == prompt_id)
            .cloned()
            .collect();
        comments.sort_by_key(|comment| (comment.timestamps.created_at(), comment.id.as_uuid()));
        Ok(comments)
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn count(&self) -> DomainResult<u64> {
        let state = self.state.read().await;
        Ok(state.users.len() as u64)
    }

    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut state = self.state.write().await;
        if state
            .users
            .values()
            .any(|user| user.username == new_user.username)
        {
            return Err(DomainError::Conflict("username already exists".into()));
        }

        let is_first = state.users.is_empty();
        let user = User {
            id: new_user.id,
            username: new_user.username,
            is_staff: new_user.is_staff || is_first,
            is_active: new_user.is_active,
            created_at: new_user.created_at,
        };
        state.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let state = self.state.read().await;
        Ok(state
            .users
            .values()
            .find(|user| &user.username == username)
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let state = self.state.read().await;
        Ok(state.users.get(&id).cloned())
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        let mut state = self.state.write().await;
        state
            .remove_user(id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("user not found".into()))
    }
}
