// src/application/commands/access.rs
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::access::{AccessRequest, Actor},
};
use http::Method;

pub(crate) fn ensure_method(request: &AccessRequest, allowed: &[Method]) -> ApplicationResult<()> {
    if allowed.contains(request.method()) {
        Ok(())
    } else {
        Err(ApplicationError::method_not_allowed(format!(
            "{} is not accepted here",
            request.method()
        )))
    }
}

pub(crate) fn ensure_authenticated(request: &AccessRequest) -> ApplicationResult<Actor> {
    request
        .actor()
        .copied()
        .ok_or_else(|| deny(request, "authentication required"))
}

/// Turns a rule's verdict into an error the dispatcher reports as 403.
pub(crate) fn ensure_allowed(
    request: &AccessRequest,
    allowed: bool,
    reason: &str,
) -> ApplicationResult<()> {
    if allowed {
        Ok(())
    } else {
        Err(deny(request, reason))
    }
}

fn deny(request: &AccessRequest, reason: &str) -> ApplicationError {
    tracing::warn!(
        method = %request.method(),
        actor = ?request.actor().map(|actor| actor.id),
        reason,
        "write access denied"
    );
    ApplicationError::forbidden(reason)
}
