use crate::domain::user::{User, UserId};
use http::Method;

/// The identity behind a request, as established by authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub id: UserId,
    pub is_staff: bool,
}

impl Actor {
    pub fn new(id: UserId, is_staff: bool) -> Self {
        Self { id, is_staff }
    }
}

impl From<&User> for Actor {
    fn from(user: &User) -> Self {
        Self::new(user.id, user.is_staff)
    }
}

/// What access rules get to see about an incoming request.
#[derive(Debug, Clone)]
pub struct AccessRequest {
    method: Method,
    actor: Option<Actor>,
}

impl AccessRequest {
    pub fn new(method: Method, actor: Option<Actor>) -> Self {
        Self { method, actor }
    }

    pub fn anonymous(method: Method) -> Self {
        Self::new(method, None)
    }

    pub fn authenticated(method: Method, actor: Actor) -> Self {
        Self::new(method, Some(actor))
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn actor(&self) -> Option<&Actor> {
        self.actor.as_ref()
    }

    /// GET, HEAD and OPTIONS never mutate state.
    pub fn is_safe_method(&self) -> bool {
        matches!(self.method, Method::GET | Method::HEAD | Method::OPTIONS)
    }

    pub fn is_staff(&self) -> bool {
        self.actor.is_some_and(|actor| actor.is_staff)
    }

    /// True when the request is made by `user_id`. Anonymous requests never match.
    pub fn is_made_by(&self, user_id: UserId) -> bool {
        self.actor.is_some_and(|actor| actor.id == user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_only_methods_are_safe() {
        for method in [Method::GET, Method::HEAD, Method::OPTIONS] {
            assert!(AccessRequest::anonymous(method).is_safe_method());
        }
        for method in [Method::POST, Method::PUT, Method::PATCH, Method::DELETE] {
            assert!(!AccessRequest::anonymous(method).is_safe_method());
        }
    }

    #[test]
    fn anonymous_requests_match_nobody() {
        let request = AccessRequest::anonymous(Method::DELETE);
        assert!(!request.is_made_by(UserId::generate()));
        assert!(!request.is_staff());
    }
}
