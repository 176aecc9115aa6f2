pub(crate) mod access;
pub mod comments;
pub mod content;
pub mod users;
