//! User entity - identity holder for writers and requesters

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::UserId;

/// A registered user
///
/// Equality is by identifier only: two values describing the same stored
/// user compare equal even when profile fields have drifted apart. The
/// identifier is immutable once assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    login: String,
    name: String,
    email: String,
}

impl User {
    /// Create a user with the given identity and profile fields
    pub fn new(
        id: impl Into<UserId>,
        login: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            login: login.into(),
            name: name.into(),
            email: email.into(),
        }
    }

    /// The user's identity
    pub fn id(&self) -> UserId {
        self.id
    }

    /// The login name
    pub fn login(&self) -> &str {
        &self.login
    }

    /// The display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The contact email
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Check whether this value and `other` are the same stored identity
    pub fn is_same(&self, other: &User) -> bool {
        self.id == other.id
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}
