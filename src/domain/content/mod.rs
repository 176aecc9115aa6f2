pub mod entity;
pub mod kind;
pub mod repository;
pub mod services;
pub mod slug_assignment;
pub mod timestamps;
pub mod value_objects;

pub use entity::{ContentItem, ContentUpdate, NewContentItem};
pub use kind::ContentKind;
pub use repository::{ContentReadRepository, ContentWriteRepository};
pub use timestamps::Timestamps;
pub use value_objects::{ContentBody, ContentId, ContentSlug, ContentTitle};
