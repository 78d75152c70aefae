// src/auth/mod.rs - Mock user records

//! "Authentication" in this storefront selects a hard-coded user record from
//! the fixture roster; there are no credentials, sessions, or tokens.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Customer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub avatar: String,
    pub join_date: NaiveDate,
    pub is_active: bool,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

/// Look up a fixture user by email, the way the login form resolves the
/// selected account.
pub fn find_user_by_email<'a>(users: &'a [User], email: &str) -> Option<&'a User> {
    users
        .iter()
        .find(|user| user.email.eq_ignore_ascii_case(email))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_find_user_by_email() {
        let users = fixtures::users();
        let admin = find_user_by_email(users, "admin@store.com").expect("admin exists");
        assert!(admin.is_admin());

        let john = find_user_by_email(users, "JOHN.DOE@email.com").expect("case-insensitive");
        assert_eq!(john.role, UserRole::Customer);

        assert!(find_user_by_email(users, "nobody@store.com").is_none());
    }
}
