// src/application/commands/content/delete.rs
use super::{ContentCommandService, policy::ensure_can_modify};
use crate::{
    application::{
        commands::access::ensure_method,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{access::AccessRequest, content::ContentId},
};
use http::Method;
use uuid::Uuid;

pub struct DeleteContentCommand {
    pub id: Uuid,
}

impl ContentCommandService {
    pub async fn delete_content(
        &self,
        request: &AccessRequest,
        command: DeleteContentCommand,
    ) -> ApplicationResult<()> {
        ensure_method(request, &[Method::DELETE])?;

        let id = ContentId::from_uuid(command.id);
        let item = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("content not found"))?;

        ensure_can_modify(request, &item)?;

        self.write_repo.delete(id).await?;
        tracing::info!(kind = %item.kind, id = %item.id, "content deleted");
        Ok(())
    }
}
