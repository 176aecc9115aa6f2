pub mod comments;
pub mod content;
pub mod users;

pub use comments::CommentDto;
pub use content::ContentItemDto;
pub use users::UserDto;
