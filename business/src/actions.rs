//! Row operations triggered from the table: edit trigger, delete one, delete
//! selected. All of them are silent no-ops on ids that are no longer present.

use log::{debug, info, warn};

use crate::{GridHandle, MemberField, MemberId, RosterRows};

/// A row action picked in the table this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit(MemberId),
    Delete(MemberId),
}

/// Opens the name editor of row `id`.
pub fn start_editing(rows: &RosterRows, grid: &mut impl GridHandle, id: MemberId) {
    let Some(index) = rows.index_of(id) else {
        debug!("Edit requested for missing row {id}, ignoring");
        return;
    };

    debug!("Editing name of row {id} at index {index}");
    if let Err(err) = grid.begin_edit(id, MemberField::Name) {
        warn!("Could not start editing row {id}: {err}");
    }
}

/// Removes row `id`. Returns whether a row was removed.
pub fn delete_row(rows: &mut RosterRows, id: MemberId) -> bool {
    let removed = rows.delete_one(id);
    if removed {
        info!("Deleted member {id}");
    } else {
        debug!("Delete requested for missing row {id}, ignoring");
    }
    removed
}

/// Removes every row ticked in the grid. Returns how many were removed.
pub fn delete_selected(rows: &mut RosterRows, grid: &impl GridHandle) -> usize {
    let selected = grid.selected_row_ids();
    let removed = rows.delete_many(&selected);
    if removed > 0 {
        info!("Deleted {removed} selected members");
    }
    removed
}

/// Applies a row action.
pub fn apply_row_action(rows: &mut RosterRows, grid: &mut impl GridHandle, action: RowAction) {
    match action {
        RowAction::Edit(id) => start_editing(rows, grid, id),
        RowAction::Delete(id) => {
            delete_row(rows, id);
        }
    }
}
