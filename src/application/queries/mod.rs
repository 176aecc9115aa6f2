pub mod content;
pub(crate) mod visibility;
