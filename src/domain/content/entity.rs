// src/domain/content/entity.rs
use crate::domain::content::kind::ContentKind;
use crate::domain::content::timestamps::Timestamps;
use crate::domain::content::value_objects::{ContentBody, ContentId, ContentSlug, ContentTitle};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use std::fmt;

/// A prompt, news post, blog post, or tool listing.
#[derive(Debug, Clone)]
pub struct ContentItem {
    pub id: ContentId,
    pub kind: ContentKind,
    pub title: ContentTitle,
    pub slug: ContentSlug,
    pub body: ContentBody,
    pub author_id: UserId,
    pub is_published: bool,
    pub views: u64,
    pub timestamps: Timestamps,
}

impl ContentItem {
    /// Bumps the counter without touching `updated_at`; a view is not an edit.
    pub fn increment_views(&mut self) {
        self.views = self.views.saturating_add(1);
    }

    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.timestamps.created_at()
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.timestamps.updated_at()
    }
}

impl fmt::Display for ContentItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.title, f)
    }
}

#[derive(Debug, Clone)]
pub struct NewContentItem {
    pub id: ContentId,
    pub kind: ContentKind,
    pub title: ContentTitle,
    pub slug: ContentSlug,
    pub body: ContentBody,
    pub author_id: UserId,
    pub is_published: bool,
    pub timestamps: Timestamps,
}

impl NewContentItem {
    /// Materialises the stored form; new items start with zero views.
    pub fn into_item(self) -> ContentItem {
        ContentItem {
            id: self.id,
            kind: self.kind,
            title: self.title,
            slug: self.slug,
            body: self.body,
            author_id: self.author_id,
            is_published: self.is_published,
            views: 0,
            timestamps: self.timestamps,
        }
    }
}

/// Field changes for an existing item. `None` leaves a field as stored.
#[derive(Debug, Clone)]
pub struct ContentUpdate {
    pub id: ContentId,
    pub title: Option<ContentTitle>,
    pub slug: Option<ContentSlug>,
    pub body: Option<ContentBody>,
    pub is_published: Option<bool>,
    pub updated_at: DateTime<Utc>,
}

impl ContentUpdate {
    pub fn new(id: ContentId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            body: None,
            is_published: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: ContentTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: ContentSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_body(mut self, body: ContentBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_published(mut self, is_published: bool) -> Self {
        self.is_published = Some(is_published);
        self
    }

    /// Applies the changes to a loaded item, refreshing `updated_at`.
    pub fn apply_to(&self, item: &mut ContentItem) {
        if let Some(title) = &self.title {
            item.title = title.clone();
        }
        if let Some(slug) = &self.slug {
            item.slug = slug.clone();
        }
        if let Some(body) = &self.body {
            item.body = body.clone();
        }
        if let Some(is_published) = self.is_published {
            item.is_published = is_published;
        }
        item.timestamps.touch(self.updated_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_item() -> ContentItem {
        NewContentItem {
            id: ContentId::generate(),
            kind: ContentKind::Prompt,
            title: ContentTitle::new("Write a haiku").unwrap(),
            slug: ContentSlug::new("write-a-haiku").unwrap(),
            body: ContentBody::new("About autumn").unwrap(),
            author_id: UserId::generate(),
            is_published: true,
            timestamps: Timestamps::new(Utc::now()),
        }
        .into_item()
    }

    #[test]
    fn new_items_start_unviewed() {
        assert_eq!(sample_item().views, 0);
    }

    #[test]
    fn increment_views_counts_exactly_and_keeps_updated_at() {
        let mut item = sample_item();
        let before = item.updated_at();
        for _ in 0..7 {
            item.increment_views();
        }
        assert_eq!(item.views, 7);
        assert_eq!(item.updated_at(), before);
    }

    #[test]
    fn increment_views_saturates() {
        let mut item = sample_item();
        item.views = u64::MAX;
        item.increment_views();
        assert_eq!(item.views, u64::MAX);
    }

    #[test]
    fn title_change_refreshes_updated_at_only() {
        let mut item = sample_item();
        let created = item.created_at();
        let later = created + Duration::seconds(30);
        ContentUpdate::new(item.id, later)
            .with_title(ContentTitle::new("New title").unwrap())
            .with_body(ContentBody::new("New body").unwrap())
            .apply_to(&mut item);
        assert_eq!(item.title.as_str(), "New title");
        assert_eq!(item.body.as_str(), "New body");
        assert_eq!(item.slug.as_str(), "write-a-haiku");
        assert_eq!(item.created_at(), created);
        assert_eq!(item.updated_at(), later);
    }

    #[test]
    fn display_shows_title() {
        assert_eq!(sample_item().to_string(), "Write a haiku");
    }

    #[test]
    fn update_applies_only_present_fields() {
        let mut item = sample_item();
        let later = item.created_at() + Duration::minutes(1);
        let update = ContentUpdate::new(item.id, later).with_published(false);
        update.apply_to(&mut item);
        assert!(!item.is_published);
        assert_eq!(item.title.as_str(), "Write a haiku");
        assert_eq!(item.updated_at(), later);
    }
}
