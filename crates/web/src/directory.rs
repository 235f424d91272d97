//! Directory aggregation: one unified, searchable list over both sources.
//!
//! Pure functions over already-fetched data. Remote records come first,
//! then local records, each source keeping its own internal order. No
//! de-duplication is performed: remote ids are numeric and local ids are
//! generated UUID strings, so the namespaces never collide in practice.

use crewlist_core::Role;

use crate::models::LocalUser;
use crate::remote::RemoteUser;

/// Which source a directory entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Remote,
    Local,
}

/// A row of the unified directory list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Identifier as a string, usable directly in a `/users/{id}` link.
    pub id: String,
    pub name: String,
    pub email: String,
    /// City from the remote address, absent for local records.
    pub city: Option<String>,
    /// Zipcode from the remote address, absent for local records.
    pub zipcode: Option<String>,
    /// Role, present only for local records.
    pub role: Option<Role>,
    pub source: Source,
}

impl DirectoryEntry {
    fn from_remote(user: &RemoteUser) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            city: user.address.as_ref().map(|a| a.city.clone()),
            zipcode: user.address.as_ref().map(|a| a.zipcode.clone()),
            role: None,
            source: Source::Remote,
        }
    }

    fn from_local(user: &LocalUser) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.to_string(),
            city: None,
            zipcode: None,
            role: Some(user.role),
            source: Source::Local,
        }
    }
}

/// Build the unified directory list: remote records first, then local
/// records, preserving each source's order.
#[must_use]
pub fn unified(remote: &[RemoteUser], local: &[LocalUser]) -> Vec<DirectoryEntry> {
    remote
        .iter()
        .map(DirectoryEntry::from_remote)
        .chain(local.iter().map(DirectoryEntry::from_local))
        .collect()
}

/// Filter entries by a case-insensitive substring match on the name.
///
/// An empty query returns the list unfiltered; order is preserved.
#[must_use]
pub fn filter_by_name(entries: Vec<DirectoryEntry>, query: &str) -> Vec<DirectoryEntry> {
    if query.is_empty() {
        return entries;
    }

    let needle = query.to_lowercase();
    entries
        .into_iter()
        .filter(|entry| entry.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crewlist_core::{RemoteUserId, UserFormInput};

    fn remote(id: i64, name: &str) -> RemoteUser {
        RemoteUser {
            id: RemoteUserId::new(id),
            name: name.to_owned(),
            email: format!("{}@remote.example", id),
            phone: None,
            website: None,
            company: None,
            address: None,
        }
    }

    fn local(name: &str) -> LocalUser {
        let data = UserFormInput {
            name: name.to_owned(),
            email: "local@user.example".to_owned(),
            age: "30".to_owned(),
            role: "Viewer".to_owned(),
        }
        .validate()
        .expect("valid form");
        LocalUser::from_form(data)
    }

    #[test]
    fn remote_records_precede_local_records() {
        let remotes = [remote(1, "A"), remote(2, "B")];
        let locals = [local("C")];

        let entries = unified(&remotes, &locals);
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[test]
    fn each_source_keeps_its_internal_order() {
        let remotes = [remote(5, "Zeta"), remote(1, "Alpha")];
        let locals = [local("Last"), local("First")];

        let entries = unified(&remotes, &locals);
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Zeta", "Alpha", "Last", "First"]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let entries = unified(&[remote(1, "Leanne Graham")], &[]);

        let hits = filter_by_name(entries.clone(), "leanne");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits.first().map(|e| e.name.as_str()), Some("Leanne Graham"));

        assert!(filter_by_name(entries, "zz").is_empty());
    }

    #[test]
    fn empty_query_returns_everything() {
        let entries = unified(&[remote(1, "A"), remote(2, "B")], &[local("C")]);
        assert_eq!(filter_by_name(entries.clone(), "").len(), entries.len());
    }

    #[test]
    fn identical_names_across_sources_are_both_kept() {
        // No de-duplication takes place across the two namespaces.
        let entries = unified(&[remote(1, "Sam Doe")], &[local("Sam Doe")]);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries.first().map(|e| e.source), Some(Source::Remote));
        assert_eq!(entries.get(1).map(|e| e.source), Some(Source::Local));
    }
}
