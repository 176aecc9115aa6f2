// src/application/commands/content/create.rs
use super::{ContentCommandService, policy::ensure_can_write_collection};
use crate::{
    application::{
        commands::access::ensure_method,
        dto::ContentItemDto,
        error::ApplicationResult,
    },
    domain::{
        access::AccessRequest,
        content::{
            ContentBody, ContentId, ContentKind, ContentTitle, NewContentItem, Timestamps,
        },
    },
};
use http::Method;
use std::sync::Arc;

pub struct CreateContentCommand {
    pub kind: ContentKind,
    pub title: String,
    pub body: String,
    pub slug: Option<String>,
    pub is_published: Option<bool>,
}

impl CreateContentCommand {
    pub fn builder(kind: ContentKind) -> CreateContentCommandBuilder {
        CreateContentCommandBuilder {
            kind,
            title: None,
            body: None,
            slug: None,
            is_published: None,
        }
    }
}

pub struct CreateContentCommandBuilder {
    kind: ContentKind,
    title: Option<String>,
    body: Option<String>,
    slug: Option<String>,
    is_published: Option<bool>,
}

impl CreateContentCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn published(mut self, is_published: bool) -> Self {
        self.is_published = Some(is_published);
        self
    }

    pub fn build(self) -> Result<CreateContentCommand, &'static str> {
        Ok(CreateContentCommand {
            kind: self.kind,
            title: self.title.ok_or("title is required")?,
            body: self.body.ok_or("body is required")?,
            slug: self.slug,
            is_published: self.is_published,
        })
    }
}

impl ContentCommandService {
    /// Stores a new item, deriving its slug when none is supplied.
    pub async fn create_content(
        &self,
        request: &AccessRequest,
        command: CreateContentCommand,
    ) -> ApplicationResult<ContentItemDto> {
        ensure_method(request, &[Method::POST])?;
        let actor = ensure_can_write_collection(request, command.kind)?;

        let title = ContentTitle::new(command.title)?;
        let body = ContentBody::new(command.body)?;
        let is_published = command
            .is_published
            .unwrap_or(self.settings.default_published);
        let kind = command.kind;
        let id = ContentId::generate();
        let timestamps = Timestamps::new(self.clock.now());

        let write_repo = Arc::clone(&self.write_repo);
        let item_title = title.clone();
        let created = self
            .write_with_slug(kind, &title, command.slug.as_deref(), None, move |slug| {
                let write_repo = Arc::clone(&write_repo);
                let new_item = NewContentItem {
                    id,
                    kind,
                    title: item_title.clone(),
                    slug,
                    body: body.clone(),
                    author_id: actor.id,
                    is_published,
                    timestamps,
                };
                async move { write_repo.insert(new_item).await }
            })
            .await?;

        tracing::info!(
            kind = %created.kind,
            id = %created.id,
            slug = %created.slug,
            author = %created.author_id,
            "content created"
        );
        Ok(created.into())
    }
}
