use super::UserCommandService;
use crate::{
    application::{
        commands::access::{ensure_allowed, ensure_method},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{access::AccessRequest, user::UserId},
};
use http::Method;
use uuid::Uuid;

pub struct DeleteUserCommand {
    pub id: Uuid,
}

impl UserCommandService {
    /// Deletes an account and, with it, everything the account authored.
    pub async fn delete_user(
        &self,
        request: &AccessRequest,
        command: DeleteUserCommand,
    ) -> ApplicationResult<()> {
        ensure_method(request, &[Method::DELETE])?;

        let id = UserId::from_uuid(command.id);
        let allowed = request.is_made_by(id) || request.is_staff();
        ensure_allowed(request, allowed, "only the account owner or staff may delete it")?;

        if self.user_repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("user not found"));
        }

        self.user_repo.delete(id).await?;
        tracing::info!(user = %id, "user deleted with authored content");
        Ok(())
    }
}
