// src/application/commands/content/mod.rs
mod create;
mod delete;
mod policy;
mod service;
mod update;
mod view;

pub use create::{CreateContentCommand, CreateContentCommandBuilder};
pub use delete::DeleteContentCommand;
pub use service::{ContentCommandService, ContentSettings};
pub use update::UpdateContentCommand;
pub use view::RecordViewCommand;
