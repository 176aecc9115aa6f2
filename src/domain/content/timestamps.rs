use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};

/// Creation and last-save instants shared by every stored entity.
///
/// `created_at` is fixed once constructed and `updated_at` never falls
/// behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamps {
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Timestamps {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuilds timestamps loaded from storage.
    pub fn restore(created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> DomainResult<Self> {
        if updated_at < created_at {
            return Err(DomainError::Validation(
                "updated_at cannot precede created_at".into(),
            ));
        }
        Ok(Self {
            created_at,
            updated_at,
        })
    }

    /// Marks a save. A clock running behind `created_at` is clamped.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now.max(self.created_at);
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn touch_moves_only_updated_at() {
        let now = Utc::now();
        let mut stamps = Timestamps::new(now);
        let later = now + Duration::seconds(5);
        stamps.touch(later);
        assert_eq!(stamps.created_at(), now);
        assert_eq!(stamps.updated_at(), later);
    }

    #[test]
    fn touch_never_goes_behind_creation() {
        let now = Utc::now();
        let mut stamps = Timestamps::new(now);
        stamps.touch(now - Duration::hours(1));
        assert_eq!(stamps.updated_at(), now);
    }

    #[test]
    fn restore_rejects_inverted_pair() {
        let now = Utc::now();
        assert!(Timestamps::restore(now, now - Duration::seconds(1)).is_err());
        assert!(Timestamps::restore(now, now).is_ok());
    }
}
