// src/application/commands/content/policy.rs
//! Which access rules guard which kind of content.
//!
//! Prompts are user-generated: any signed-in user may create one and only
//! its author may change it. News, blog posts and tools are editorial:
//! writes need staff, and object changes go to the author or staff.

use crate::{
    application::{
        commands::access::{ensure_allowed, ensure_authenticated},
        error::ApplicationResult,
    },
    domain::{
        access::{AccessRequest, AccessRule, Actor, AdminOnly, OwnerOnly, OwnerOrAdmin},
        content::{ContentItem, ContentKind},
    },
};

pub(super) fn ensure_can_write_collection(
    request: &AccessRequest,
    kind: ContentKind,
) -> ApplicationResult<Actor> {
    let actor = ensure_authenticated(request)?;
    if kind.is_editorial() {
        let allowed = AccessRule::<ContentItem>::has_permission(&AdminOnly, request);
        ensure_allowed(request, allowed, "staff only")?;
    }
    Ok(actor)
}

pub(super) fn ensure_can_modify(request: &AccessRequest, item: &ContentItem) -> ApplicationResult<()> {
    ensure_can_write_collection(request, item.kind)?;
    let allowed = if item.kind.is_editorial() {
        OwnerOrAdmin.has_object_permission(request, item)
    } else {
        OwnerOnly.has_object_permission(request, item)
    };
    ensure_allowed(request, allowed, "only the author may change this item")
}
