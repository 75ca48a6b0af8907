//! Checkbox selection, keyed by member id.

use std::collections::BTreeSet;

use crate::{MemberId, RosterRows};

/// State of the header checkbox relative to the rows it controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheck {
    Unchecked,
    Partial,
    Checked,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<MemberId>,
}

impl Selection {
    pub fn ids(&self) -> &BTreeSet<MemberId> {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: MemberId) -> bool {
        self.ids.contains(&id)
    }

    pub fn set(&mut self, id: MemberId, selected: bool) {
        if selected {
            self.ids.insert(id);
        } else {
            self.ids.remove(&id);
        }
    }

    pub fn toggle(&mut self, id: MemberId) {
        let selected = !self.contains(id);
        self.set(id, selected);
    }

    /// Header checkbox state for the rows in `ids`.
    pub fn header_check(&self, ids: &[MemberId]) -> HeaderCheck {
        let selected = ids.iter().filter(|id| self.ids.contains(id)).count();
        if selected == 0 {
            HeaderCheck::Unchecked
        } else if selected == ids.len() {
            HeaderCheck::Checked
        } else {
            HeaderCheck::Partial
        }
    }

    /// Header checkbox click: select every row in `ids`, or deselect them all
    /// when they already are.
    pub fn toggle_all(&mut self, ids: &[MemberId]) {
        if self.header_check(ids) == HeaderCheck::Checked {
            for id in ids {
                self.ids.remove(id);
            }
        } else {
            self.ids.extend(ids.iter().copied());
        }
    }

    /// Forget ids whose rows are gone.
    pub fn prune(&mut self, rows: &RosterRows) {
        if !self.ids.is_empty() {
            self.ids.retain(|&id| rows.contains(id));
        }
    }
}
