mod delete;
mod register;
mod service;

pub use delete::DeleteUserCommand;
pub use register::RegisterUserCommand;
pub use service::UserCommandService;
