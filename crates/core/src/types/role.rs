//! User role.
//!
//! The role set is closed: exactly `Admin`, `Editor`, and `Viewer`.
//! Membership is checked through [`Role::parse`] rather than relying on
//! deserialization alone, so form input can be validated explicitly.

use serde::{Deserialize, Serialize};

/// Role assigned to a locally-created user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Editor,
    Viewer,
}

impl Role {
    /// All valid roles, in display order.
    pub const ALL: [Self; 3] = [Self::Admin, Self::Editor, Self::Viewer];

    /// Parse a role from its canonical string form.
    ///
    /// Returns `None` for anything outside the closed set, including the
    /// empty string a form submits when no option was selected.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Admin" => Some(Self::Admin),
            "Editor" => Some(Self::Editor),
            "Viewer" => Some(Self::Viewer),
            _ => None,
        }
    }

    /// Canonical string form, identical to the serialized representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Editor => "Editor",
            Self::Viewer => "Viewer",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
