//! Typed capability the table operations use to talk to the grid.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::{MemberField, MemberId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("row {0} is not in the grid")]
    RowNotFound(MemberId),
}

/// The only grid surface the edit and delete operations need.
///
/// The handle is owned by whoever owns the table view and is passed into the
/// operations explicitly.
pub trait GridHandle {
    /// Ids of the rows currently ticked in the checkbox column.
    fn selected_row_ids(&self) -> BTreeSet<MemberId>;

    /// Put the cell `(id, field)` into edit mode.
    fn begin_edit(&mut self, id: MemberId, field: MemberField) -> Result<(), GridError>;
}
