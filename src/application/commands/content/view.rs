// src/application/commands/content/view.rs
use super::ContentCommandService;
use crate::{
    application::{
        commands::access::ensure_method,
        error::{ApplicationError, ApplicationResult},
        queries::visibility::can_view,
    },
    domain::{access::AccessRequest, content::ContentId},
};
use http::Method;
use uuid::Uuid;

pub struct RecordViewCommand {
    pub id: Uuid,
}

impl ContentCommandService {
    /// Counts one view and returns the new total. Only `views` is written,
    /// and only a GET counts.
    pub async fn record_view(
        &self,
        request: &AccessRequest,
        command: RecordViewCommand,
    ) -> ApplicationResult<u64> {
        ensure_method(request, &[Method::GET])?;

        let id = ContentId::from_uuid(command.id);
        let item = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("content not found"))?;

        if !can_view(request.actor(), &item) {
            return Err(ApplicationError::not_found("content not found"));
        }

        let views = self.write_repo.increment_views(id).await?;
        tracing::debug!(id = %id, views, "view recorded");
        Ok(views)
    }
}
