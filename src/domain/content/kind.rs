use crate::domain::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The families of content that share the same storage shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Prompt,
    News,
    Blog,
    Tool,
}

impl ContentKind {
    pub const ALL: [ContentKind; 4] = [
        ContentKind::Prompt,
        ContentKind::News,
        ContentKind::Blog,
        ContentKind::Tool,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Prompt => "prompt",
            ContentKind::News => "news",
            ContentKind::Blog => "blog",
            ContentKind::Tool => "tool",
        }
    }

    /// Editorial kinds are written by staff only; prompts are user-generated.
    pub fn is_editorial(&self) -> bool {
        !matches!(self, ContentKind::Prompt)
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prompt" => Ok(ContentKind::Prompt),
            "news" => Ok(ContentKind::News),
            "blog" => Ok(ContentKind::Blog),
            "tool" => Ok(ContentKind::Tool),
            other => Err(DomainError::Validation(format!(
                "unknown content kind '{other}'"
            ))),
        }
    }
}
