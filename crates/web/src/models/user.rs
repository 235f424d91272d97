//! Locally-created user domain type.

use serde::{Deserialize, Serialize};

use crewlist_core::{Email, LocalUserId, Role, UserFormData};

/// A user added through the form and persisted in the local store slot.
///
/// The serialized shape is exactly the slot format:
/// `{id, name, email, age, role}`. Records are never mutated after
/// creation; they only disappear through removal or when the slot's
/// backing data is discarded as corrupted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalUser {
    /// Generated unique ID (UUID v4 string, disjoint from remote numeric ids).
    pub id: LocalUserId,
    /// Display name, non-empty after validation.
    pub name: String,
    /// Validated email address.
    pub email: Email,
    /// Age in years, at least 18.
    pub age: u32,
    /// Role from the closed Admin/Editor/Viewer set.
    pub role: Role,
}

impl LocalUser {
    /// Promote a validated form submission to a stored record by attaching
    /// a freshly generated ID.
    #[must_use]
    pub fn from_form(data: UserFormData) -> Self {
        Self {
            id: LocalUserId::generate(),
            name: data.name,
            email: data.email,
            age: data.age,
            role: data.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crewlist_core::UserFormInput;

    fn sample_form() -> UserFormData {
        UserFormInput {
            name: "Grace Hopper".to_owned(),
            email: "grace@navy.mil.example".to_owned(),
            age: "45".to_owned(),
            role: "Admin".to_owned(),
        }
        .validate()
        .expect("valid form")
    }

    #[test]
    fn from_form_attaches_a_unique_id() {
        let a = LocalUser::from_form(sample_form());
        let b = LocalUser::from_form(sample_form());
        assert_ne!(a.id, b.id);
        assert_eq!(a.name, b.name);
    }

    #[test]
    fn serializes_to_the_slot_shape() {
        let user = LocalUser::from_form(sample_form());
        let value = serde_json::to_value(&user).expect("serializable");
        let obj = value.as_object().expect("object");
        assert_eq!(obj.len(), 5);
        for key in ["id", "name", "email", "age", "role"] {
            assert!(obj.contains_key(key), "missing key {key}");
        }
        assert_eq!(obj["role"], "Admin");
        assert_eq!(obj["age"], 45);
    }
}
