//! The single cell currently being edited.

use crate::{MemberField, MemberId, RosterRows};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditingCell {
    pub id: MemberId,
    pub field: MemberField,
    /// Text being typed. Seeded from the row on the first frame.
    pub buffer: String,
    seeded: bool,
    focus_pending: bool,
}

impl EditingCell {
    pub(crate) fn new(id: MemberId, field: MemberField) -> Self {
        Self {
            id,
            field,
            buffer: String::new(),
            seeded: false,
            focus_pending: true,
        }
    }

    pub fn is_at(&self, id: MemberId, field: MemberField) -> bool {
        self.id == id && self.field == field
    }

    /// Fills the buffer with the current cell value, once.
    ///
    /// Returns `false` when the row is gone.
    pub(crate) fn seed(&mut self, rows: &RosterRows) -> bool {
        let Some(member) = rows.find(self.id) else {
            return false;
        };
        if !self.seeded {
            self.buffer = member.field(self.field).to_owned();
            self.seeded = true;
        }
        true
    }

    pub(crate) fn is_seeded(&self) -> bool {
        self.seeded
    }

    /// Whether the editor still has to grab keyboard focus. Reading it
    /// consumes the request.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_pending)
    }
}
