//! Derivation of unique, URL-safe slugs from titles.
//!
//! A slug is derived once, when an item is first stored without one. The
//! derived base is probed against storage and suffixed with `-1`, `-2`, ...
//! until a free candidate turns up. Probing is check-then-act: the storage
//! layer must still reject duplicates at commit time.

use crate::domain::content::value_objects::MAX_SLUG_LEN;

/// Base used when a title contains nothing slug-worthy.
pub const FALLBACK_BASE: &str = "item";

/// Lowercases, transliterates, and collapses non-alphanumeric runs into
/// single hyphens, trimming hyphens at either end.
pub fn slugify(input: &str) -> String {
    slug::slugify(input)
}

/// The slug a title maps to before any uniqueness suffix is added.
pub fn base_slug(title: &str, fallback: &str) -> String {
    let mut base = slugify(title);
    if base.is_empty() {
        base = slugify(fallback);
    }
    truncate_slug(&base, MAX_SLUG_LEN)
}

fn truncate_slug(value: &str, max_len: usize) -> String {
    if value.len() <= max_len {
        return value.to_string();
    }
    // slugify output is ASCII, so byte offsets are char boundaries.
    value[..max_len].trim_end_matches('-').to_string()
}

/// Yields `base`, `base-1`, `base-2`, ... keeping every candidate within
/// the slug length limit.
#[derive(Debug, Clone)]
pub struct SlugCandidates {
    base: String,
    counter: u64,
}

impl SlugCandidates {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            counter: 0,
        }
    }

    /// Candidates for `title`, starting from [`base_slug`].
    pub fn for_title(title: &str, fallback: &str) -> Self {
        Self::new(base_slug(title, fallback))
    }

    pub fn advance(&mut self) -> String {
        let candidate = if self.counter == 0 {
            self.base.clone()
        } else {
            let suffix = format!("-{}", self.counter);
            let room = MAX_SLUG_LEN.saturating_sub(suffix.len());
            format!("{}{suffix}", truncate_slug(&self.base, room))
        };
        self.counter = self.counter.saturating_add(1);
        candidate
    }
}

impl Iterator for SlugCandidates {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.advance())
    }
}

/// A caller-supplied slug counts only when it is non-empty; an empty one
/// asks for derivation like an absent one.
pub fn explicit_requested(explicit_slug: Option<&str>) -> Option<&str> {
    explicit_slug.filter(|value| !value.is_empty())
}

/// Returns `explicit_slug` untouched when it is non-empty, otherwise the
/// first candidate derived from `title` that `exists` reports as free.
pub fn assign_slug<F>(title: &str, explicit_slug: Option<&str>, exists: F) -> String
where
    F: FnMut(&str) -> bool,
{
    assign_slug_with_fallback(title, explicit_slug, FALLBACK_BASE, exists)
}

pub fn assign_slug_with_fallback<F>(
    title: &str,
    explicit_slug: Option<&str>,
    fallback: &str,
    mut exists: F,
) -> String
where
    F: FnMut(&str) -> bool,
{
    if let Some(explicit) = explicit_requested(explicit_slug) {
        return explicit.to_string();
    }

    let mut candidates = SlugCandidates::for_title(title, fallback);
    loop {
        let candidate = candidates.advance();
        if !exists(&candidate) {
            return candidate;
        }
    }
}
