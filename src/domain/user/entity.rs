// src/domain/user/entity.rs
use crate::domain::user::value_objects::{UserId, Username};
use chrono::{DateTime, Utc};

/// An account that can author content and act on requests.
///
/// `is_active` is carried for the upstream authenticator; nothing in this
/// crate decides on it.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub is_staff: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: UserId,
    pub username: Username,
    pub is_staff: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(username: Username, is_staff: bool, created_at: DateTime<Utc>) -> Self {
        Self {
            id: UserId::generate(),
            username,
            is_staff,
            is_active: true,
            created_at,
        }
    }
}
