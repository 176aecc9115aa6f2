// src/application/commands/content/update.rs
use super::{ContentCommandService, policy::ensure_can_modify};
use crate::{
    application::{
        commands::access::ensure_method,
        dto::ContentItemDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        access::AccessRequest,
        content::{ContentBody, ContentId, ContentSlug, ContentTitle, ContentUpdate},
    },
};
use http::Method;
use std::sync::Arc;
use uuid::Uuid;

/// Partial update. A title change never re-derives the slug; sending an
/// empty slug asks for a fresh one derived from the resulting title, and
/// the item's own current slug counts as free for it.
#[derive(Default)]
pub struct UpdateContentCommand {
    pub id: Uuid,
    pub title: Option<String>,
    pub body: Option<String>,
    pub slug: Option<String>,
    pub is_published: Option<bool>,
}

impl ContentCommandService {
    pub async fn update_content(
        &self,
        request: &AccessRequest,
        command: UpdateContentCommand,
    ) -> ApplicationResult<ContentItemDto> {
        ensure_method(request, &[Method::PUT, Method::PATCH])?;

        let id = ContentId::from_uuid(command.id);
        let item = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("content not found"))?;

        ensure_can_modify(request, &item)?;

        let UpdateContentCommand {
            id: _,
            title,
            body,
            slug,
            is_published,
        } = command;

        let mut update = ContentUpdate::new(id, self.clock.now());

        if let Some(title) = title {
            update = update.with_title(ContentTitle::new(title)?);
        }
        if let Some(body) = body {
            update = update.with_body(ContentBody::new(body)?);
        }
        if let Some(is_published) = is_published {
            update = update.with_published(is_published);
        }

        let updated = match slug.as_deref() {
            Some("") => {
                let title = update.title.clone().unwrap_or_else(|| item.title.clone());
                let write_repo = Arc::clone(&self.write_repo);
                self.write_with_slug(item.kind, &title, None, Some(item.id), move |slug| {
                    let write_repo = Arc::clone(&write_repo);
                    let update = update.clone().with_slug(slug);
                    async move { write_repo.update(update).await }
                })
                .await?
            }
            Some(explicit) if explicit != item.slug.as_str() => {
                let update = update.with_slug(ContentSlug::new(explicit)?);
                self.write_repo.update(update).await?
            }
            _ => self.write_repo.update(update).await?,
        };

        tracing::info!(kind = %updated.kind, id = %updated.id, "content updated");
        Ok(updated.into())
    }
}
