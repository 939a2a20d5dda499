/// Profile model and access roles
///
/// This module provides the Profile model for the `profiles` table and the
/// role-based access control helpers used by the route guard and the admin
/// page.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE profiles (
///     id UUID PRIMARY KEY REFERENCES auth.users(id) ON DELETE CASCADE,
///     role TEXT NOT NULL DEFAULT 'student'
/// );
/// ```
///
/// # Roles
///
/// - **student**: Read-only access to events (least privilege, the fallback
///   when the role lookup fails)
/// - **organizer**: Can create events and checklists
/// - **faculty**: Read-only access, same surface as student
/// - **admin**: Can create events and manage user roles
///
/// Row-level security on the backend is the real enforcement boundary; these
/// helpers only gate views client-side.
///
/// # Example
///
/// ```
/// use eventhub_core::models::profile::Role;
///
/// assert!(Role::Organizer.can_create_events());
/// assert!(!Role::Organizer.can_manage_users());
/// assert!(Role::Admin.can_manage_users());
/// assert_eq!(Role::default(), Role::Student);
/// ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Access-level roles stored in the `profiles` table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Read-only access to events; the least-privilege fallback
    #[default]
    Student,

    /// Can create events and their checklists
    Organizer,

    /// Read-only access, distinct from students for reporting
    Faculty,

    /// Full access: create events, manage user roles
    Admin,
}

impl Role {
    /// Converts role to string for display and wire encoding
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Organizer => "organizer",
            Role::Faculty => "faculty",
            Role::Admin => "admin",
        }
    }

    /// Can reach the event-creation page and create events
    pub fn can_create_events(&self) -> bool {
        matches!(self, Role::Organizer | Role::Admin)
    }

    /// Can list profiles and change other users' roles
    ///
    /// The backend rejects these operations for non-admins regardless of
    /// what the client thinks; this only gates the admin view.
    pub fn can_manage_users(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// All assignable roles, in the order the admin page offers them
    pub fn all() -> [Role; 4] {
        [Role::Student, Role::Organizer, Role::Faculty, Role::Admin]
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Profile model, one row per authenticated user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// User ID, shared with the auth provider
    pub id: Uuid,

    /// Access role
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_as_str() {
        assert_eq!(Role::Student.as_str(), "student");
        assert_eq!(Role::Organizer.as_str(), "organizer");
        assert_eq!(Role::Faculty.as_str(), "faculty");
        assert_eq!(Role::Admin.as_str(), "admin");
    }

    #[test]
    fn test_role_permissions() {
        assert!(!Role::Student.can_create_events());
        assert!(!Role::Faculty.can_create_events());
        assert!(Role::Organizer.can_create_events());
        assert!(Role::Admin.can_create_events());

        assert!(!Role::Student.can_manage_users());
        assert!(!Role::Organizer.can_manage_users());
        assert!(!Role::Faculty.can_manage_users());
        assert!(Role::Admin.can_manage_users());
    }

    #[test]
    fn test_role_default_is_least_privilege() {
        assert_eq!(Role::default(), Role::Student);
    }

    #[test]
    fn test_role_wire_encoding() {
        assert_eq!(serde_json::to_string(&Role::Organizer).unwrap(), "\"organizer\"");

        let role: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        // Malformed rows must fail decoding, not silently default
        assert!(serde_json::from_str::<Role>("\"superuser\"").is_err());
    }

    #[test]
    fn test_profile_row_decoding() {
        let row = r#"{"id":"6f3c8f7e-25a4-4c7a-9f3e-27d62a6f2db1","role":"faculty"}"#;
        let profile: Profile = serde_json::from_str(row).unwrap();
        assert_eq!(profile.role, Role::Faculty);
    }
}
