// src/presentation/http/extractors.rs
//! Builds the access-rule view of a request.
//!
//! Authentication runs upstream and leaves an `Actor` in the request
//! extensions; its absence means the request is anonymous.

use crate::domain::access::{AccessRequest, Actor};
use axum::{extract::FromRequestParts, http::request::Parts};
use std::convert::Infallible;

#[derive(Debug, Clone)]
pub struct RequestAccess(pub AccessRequest);

impl<S> FromRequestParts<S> for RequestAccess
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let actor = parts.extensions.get::<Actor>().copied();
        Ok(Self(AccessRequest::new(parts.method.clone(), actor)))
    }
}
