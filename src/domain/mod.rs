pub mod access;
pub mod comment;
pub mod content;
pub mod errors;
pub mod user;
