use crate::domain::{access::Actor, content::ContentItem};

/// Unpublished items are visible to their author and to staff only.
pub(crate) fn can_view(actor: Option<&Actor>, item: &ContentItem) -> bool {
    item.is_published
        || actor.is_some_and(|actor| actor.is_staff || item.is_authored_by(actor.id))
}
