pub mod request;
pub mod rules;

pub use request::{AccessRequest, Actor};
pub use rules::{
    AccessRule, AdminOnly, Authored, CommentOwnerOrParentAuthor, CommentTarget, OwnerOnly,
    OwnerOrAdmin,
};
