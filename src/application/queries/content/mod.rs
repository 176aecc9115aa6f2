mod comments;
mod get_by_id;
mod get_by_slug;
mod list;
mod service;

pub use comments::ListCommentsQuery;
pub use get_by_id::GetContentByIdQuery;
pub use get_by_slug::GetContentBySlugQuery;
pub use list::ListContentQuery;
pub use service::ContentQueryService;
