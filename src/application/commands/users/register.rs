use super::UserCommandService;
use crate::{
    application::{
        commands::access::ensure_allowed,
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        access::{AccessRequest, AccessRule, AdminOnly},
        user::{NewUser, User, Username},
    },
};

pub struct RegisterUserCommand {
    pub username: String,
    pub is_staff: bool,
}

impl UserCommandService {
    /// Registers an account. The very first account is always staff;
    /// afterwards only staff may create further staff accounts.
    pub async fn register(
        &self,
        request: &AccessRequest,
        command: RegisterUserCommand,
    ) -> ApplicationResult<UserDto> {
        let username = Username::new(command.username)?;
        let existing = self.user_repo.count().await?;

        // Storage promotes whichever account lands first, so an empty count
        // only waives the staff check here.
        let is_staff = existing > 0 && command.is_staff;
        if is_staff {
            let allowed = AccessRule::<User>::has_permission(&AdminOnly, request);
            ensure_allowed(request, allowed, "only staff may create staff accounts")?;
        }

        if self.user_repo.find_by_username(&username).await?.is_some() {
            return Err(ApplicationError::conflict("username already exists"));
        }

        let user = self
            .user_repo
            .insert(NewUser::new(username, is_staff, self.clock.now()))
            .await?;

        tracing::info!(
            user = %user.id,
            username = %user.username,
            is_staff = user.is_staff,
            "user registered"
        );
        Ok(user.into())
    }
}
