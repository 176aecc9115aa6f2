use crate::domain::content::{ContentItem, ContentKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItemDto {
    pub id: Uuid,
    pub kind: ContentKind,
    pub title: String,
    pub slug: String,
    pub body: String,
    pub author_id: Uuid,
    pub is_published: bool,
    pub views: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ContentItem> for ContentItemDto {
    fn from(item: ContentItem) -> Self {
        let created_at = item.created_at();
        let updated_at = item.updated_at();
        Self {
            id: item.id.into(),
            kind: item.kind,
            title: item.title.into(),
            slug: item.slug.into(),
            body: item.body.into(),
            author_id: item.author_id.into(),
            is_published: item.is_published,
            views: item.views,
            created_at,
            updated_at,
        }
    }
}
