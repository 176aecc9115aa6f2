//! Write-access rules for content and comments.
//!
//! Every rule grants safe (read-only) methods unconditionally. Publication
//! filtering is the query layer's job, not theirs.

use crate::domain::access::request::AccessRequest;
use crate::domain::comment::Comment;
use crate::domain::content::ContentItem;
use crate::domain::user::UserId;

/// Anything with an owning identity.
pub trait Authored {
    fn author_id(&self) -> UserId;
}

impl Authored for ContentItem {
    fn author_id(&self) -> UserId {
        self.author_id
    }
}

impl Authored for Comment {
    fn author_id(&self) -> UserId {
        self.author_id
    }
}

/// A comment together with the author of the prompt it hangs off.
#[derive(Debug, Clone, Copy)]
pub struct CommentTarget<'a> {
    pub comment: &'a Comment,
    pub prompt_author_id: UserId,
}

impl<'a> CommentTarget<'a> {
    pub fn new(comment: &'a Comment, prompt_author_id: UserId) -> Self {
        Self {
            comment,
            prompt_author_id,
        }
    }
}

pub trait AccessRule<T: ?Sized> {
    /// Collection-level check, made before any target is loaded.
    fn has_permission(&self, _request: &AccessRequest) -> bool {
        true
    }

    /// Object-level check against an already loaded target.
    fn has_object_permission(&self, _request: &AccessRequest, _target: &T) -> bool {
        true
    }
}

/// Only the author may modify.
#[derive(Debug, Clone, Copy, Default)]
pub struct OwnerOnly;

impl<T: Authored + ?Sized> AccessRule<T> for OwnerOnly {
    fn has_object_permission(&self, request: &AccessRequest, target: &T) -> bool {
        request.is_safe_method() || request.is_made_by(target.author_id())
    }
}

/// The author or any staff member may modify.
#[derive(Debug, Clone, Copy, Default)]
pub struct OwnerOrAdmin;

impl<T: Authored + ?Sized> AccessRule<T> for OwnerOrAdmin {
    fn has_object_permission(&self, request: &AccessRequest, target: &T) -> bool {
        request.is_safe_method() || request.is_made_by(target.author_id()) || request.is_staff()
    }
}

/// Only authenticated staff may write to the collection at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdminOnly;

impl<T: ?Sized> AccessRule<T> for AdminOnly {
    fn has_permission(&self, request: &AccessRequest) -> bool {
        request.is_safe_method() || request.is_staff()
    }
}

/// Comment authors may edit and delete; the prompt's author and staff may
/// additionally delete.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommentOwnerOrParentAuthor;

impl<'a> AccessRule<CommentTarget<'a>> for CommentOwnerOrParentAuthor {
    fn has_object_permission(&self, request: &AccessRequest, target: &CommentTarget<'a>) -> bool {
        if request.is_safe_method() {
            return true;
        }

        let is_comment_author = request.is_made_by(target.comment.author_id);
        if *request.method() == http::Method::DELETE {
            return is_comment_author
                || request.is_made_by(target.prompt_author_id)
                || request.is_staff();
        }

        is_comment_author
    }
}
