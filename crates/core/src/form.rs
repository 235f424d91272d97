//! Add-user form input and validation.
//!
//! [`UserFormInput`] holds the raw strings exactly as received from an HTML
//! form (or CLI flags), and [`UserFormInput::validate`] turns them into a
//! typed [`UserFormData`] or a [`FieldErrors`] map. Every failing field is
//! reported, not just the first, so the form can mark all offending inputs
//! in one pass. Validation is pure: no I/O, no side effects.

use serde::{Deserialize, Serialize};

use crate::types::{Email, Role};

/// Minimum accepted age for a locally-created user.
pub const MIN_AGE: u32 = 18;

/// Why a single form field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    /// The field is required and was empty or missing.
    RequiredField,
    /// The value does not match the expected format.
    InvalidFormat,
    /// The numeric value is below the allowed minimum.
    BelowMinimum,
    /// The value is not a member of a closed choice set.
    InvalidChoice,
}

/// A rejected form field: machine-readable kind plus the message shown
/// inline next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub kind: FieldErrorKind,
    pub message: &'static str,
}

impl FieldError {
    const fn new(kind: FieldErrorKind, message: &'static str) -> Self {
        Self { kind, message }
    }
}

impl core::fmt::Display for FieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message)
    }
}

/// Per-field validation errors for the add-user form.
///
/// One slot per field; `None` means the field passed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub age: Option<FieldError>,
    pub role: Option<FieldError>,
}

impl FieldErrors {
    /// True when every field validated.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.age.is_none() && self.role.is_none()
    }

    /// Number of rejected fields.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.name.is_some() as usize
            + self.email.is_some() as usize
            + self.age.is_some() as usize
            + self.role.is_some() as usize
    }
}

/// Raw add-user form input, field values as submitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserFormInput {
    pub name: String,
    pub email: String,
    pub age: String,
    pub role: String,
}

/// A validated add-user submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserFormData {
    pub name: String,
    pub email: Email,
    pub age: u32,
    pub role: Role,
}

impl UserFormInput {
    /// Validate every field independently.
    ///
    /// # Errors
    ///
    /// Returns a [`FieldErrors`] carrying an entry for each violated field.
    pub fn validate(&self) -> Result<UserFormData, FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.name = Some(FieldError::new(
                FieldErrorKind::RequiredField,
                "Name is required",
            ));
        }

        let email = match Email::parse(self.email.trim()) {
            Ok(email) => Some(email),
            Err(_) => {
                errors.email = Some(FieldError::new(
                    FieldErrorKind::InvalidFormat,
                    "Invalid email address",
                ));
                None
            }
        };

        let age = match self.age.trim().parse::<u32>() {
            Ok(age) if age >= MIN_AGE => Some(age),
            Ok(_) => {
                errors.age = Some(FieldError::new(
                    FieldErrorKind::BelowMinimum,
                    "Age must be 18 or older",
                ));
                None
            }
            Err(_) => {
                errors.age = Some(FieldError::new(
                    FieldErrorKind::RequiredField,
                    "Age is required",
                ));
                None
            }
        };

        let role = Role::parse(self.role.trim());
        if role.is_none() {
            errors.role = Some(FieldError::new(
                FieldErrorKind::InvalidChoice,
                "Please select a valid role",
            ));
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        // All four are present when no errors were recorded.
        match (email, age, role) {
            (Some(email), Some(age), Some(role)) => Ok(UserFormData {
                name: name.to_owned(),
                email,
                age,
                role,
            }),
            _ => Err(errors),
        }
    }
}
