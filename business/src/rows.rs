//! The in-memory row collection behind the members table.

use std::collections::{BTreeSet, HashSet};

use log::warn;

use crate::{Member, MemberField, MemberId};

/// Insertion-ordered members, unique by id.
///
/// Sorting, filtering and paging never touch this collection; they are
/// computed by [`crate::GridState`] as views over it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterRows {
    members: Vec<Member>,
}

impl RosterRows {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection, keeping the first occurrence of each id.
    pub fn from_members(members: Vec<Member>) -> Self {
        let mut rows = Self::new();
        rows.replace_all(members);
        rows
    }

    /// Replaces the whole collection.
    ///
    /// Later duplicates of an id are dropped so ids stay unique.
    pub fn replace_all(&mut self, members: Vec<Member>) {
        let mut seen = HashSet::with_capacity(members.len());
        self.members = members
            .into_iter()
            .filter(|member| {
                let fresh = seen.insert(member.id);
                if !fresh {
                    warn!("Dropping member with duplicate id {}", member.id);
                }
                fresh
            })
            .collect();
    }

    pub fn as_slice(&self) -> &[Member] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Member> {
        self.members.get(index)
    }

    pub fn find(&self, id: MemberId) -> Option<&Member> {
        self.members.iter().find(|member| member.id == id)
    }

    /// Current position of a row, if it still exists.
    pub fn index_of(&self, id: MemberId) -> Option<usize> {
        self.members.iter().position(|member| member.id == id)
    }

    pub fn contains(&self, id: MemberId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = MemberId> + '_ {
        self.members.iter().map(|member| member.id)
    }

    /// Removes the row with `id`. Returns whether a row was removed.
    pub fn delete_one(&mut self, id: MemberId) -> bool {
        let before = self.members.len();
        self.members.retain(|member| member.id != id);
        before != self.members.len()
    }

    /// Removes every row whose id is in `ids`. Returns how many were removed.
    pub fn delete_many(&mut self, ids: &BTreeSet<MemberId>) -> usize {
        if ids.is_empty() {
            return 0;
        }
        let before = self.members.len();
        self.members.retain(|member| !ids.contains(&member.id));
        before - self.members.len()
    }

    /// Writes an edited cell value. Any string is accepted.
    ///
    /// Returns `false` when the row no longer exists.
    pub fn update_field(&mut self, id: MemberId, field: MemberField, value: String) -> bool {
        match self.members.iter_mut().find(|member| member.id == id) {
            Some(member) => {
                member.set_field(field, value);
                true
            }
            None => false,
        }
    }
}
