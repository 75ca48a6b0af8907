use std::collections::{BTreeSet, HashSet};

use log::debug;

use super::editing::EditingCell;
use super::handle::{GridError, GridHandle};
use super::pager::Pager;
use super::query::RowQuery;
use super::selection::{HeaderCheck, Selection};
use crate::{MemberField, MemberId, RosterRows};

/// View state of the members grid.
///
/// Owns everything the grid adds on top of the row collection: the query
/// (sort, search, column filters), the current page, the checkbox selection
/// and the cell being edited. It keeps its own copy of the row ids, refreshed
/// by [`GridState::sync`] once per frame, the way a grid widget keeps its own
/// row model.
#[derive(Debug, Default)]
pub struct GridState {
    query: RowQuery,
    pager: Pager,
    selection: Selection,
    editing: Option<EditingCell>,
    /// Edit that was open when another cell started editing.
    displaced: Option<EditingCell>,
    known_ids: HashSet<MemberId>,
    visible_ids: Vec<MemberId>,
}

impl GridState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconciles the grid with the row collection and returns the indices of
    /// the visible rows in display order.
    ///
    /// Commits a displaced edit, drops selection entries and edits whose rows
    /// are gone, and clamps the page.
    pub fn sync(&mut self, rows: &mut RosterRows) -> Vec<usize> {
        if let Some(cell) = self.displaced.take() {
            commit_cell(cell, rows);
        }

        self.selection.prune(rows);

        if let Some(cell) = self.editing.as_mut()
            && !cell.seed(rows)
        {
            debug!("Row {} left the grid while editing, cancelling edit", cell.id);
            self.editing = None;
        }

        let visible = self.query.visible_indices(rows);
        self.pager.clamp(visible.len());

        self.known_ids = rows.ids().collect();
        self.visible_ids = visible
            .iter()
            .filter_map(|&index| rows.get(index).map(|member| member.id))
            .collect();

        visible
    }

    pub fn query(&self) -> &RowQuery {
        &self.query
    }

    pub fn cycle_sort(&mut self, field: MemberField) {
        self.query.cycle_sort(field);
    }

    /// Updates the search box text; filtering restarts from the first page.
    pub fn set_quick_filter(&mut self, text: String) {
        self.query.set_quick_filter(text);
        self.pager.first();
    }

    pub fn set_column_filter(&mut self, field: MemberField, text: String) {
        self.query.set_column_filter(field, text);
        self.pager.first();
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn pager_mut(&mut self) -> &mut Pager {
        &mut self.pager
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn toggle_selected(&mut self, id: MemberId) {
        self.selection.toggle(id);
    }

    /// Header checkbox state over the rows passing the current filters.
    pub fn header_check(&self) -> HeaderCheck {
        self.selection.header_check(&self.visible_ids)
    }

    /// Header checkbox click. Only rows passing the current filters are
    /// selected or deselected, not every row in the collection.
    pub fn toggle_all_visible(&mut self) {
        self.selection.toggle_all(&self.visible_ids);
    }

    pub fn editing(&self) -> Option<&EditingCell> {
        self.editing.as_ref()
    }

    pub fn editing_mut(&mut self) -> Option<&mut EditingCell> {
        self.editing.as_mut()
    }

    pub fn is_editing(&self, id: MemberId, field: MemberField) -> bool {
        self.editing.as_ref().is_some_and(|cell| cell.is_at(id, field))
    }

    /// Writes the editor buffer into the row and leaves edit mode.
    pub fn commit_edit(&mut self, rows: &mut RosterRows) -> bool {
        self.editing
            .take()
            .is_some_and(|cell| commit_cell(cell, rows))
    }

    pub fn cancel_edit(&mut self) {
        if let Some(cell) = self.editing.take() {
            debug!("Cancelled edit of {} on row {}", cell.field.key(), cell.id);
        }
    }
}

fn commit_cell(cell: EditingCell, rows: &mut RosterRows) -> bool {
    // Never seeded means the editor was never shown; there is nothing typed.
    if !cell.is_seeded() {
        return false;
    }
    debug!("Committing edit of {} on row {}", cell.field.key(), cell.id);
    rows.update_field(cell.id, cell.field, cell.buffer)
}

impl GridHandle for GridState {
    fn selected_row_ids(&self) -> BTreeSet<MemberId> {
        self.selection.ids().clone()
    }

    fn begin_edit(&mut self, id: MemberId, field: MemberField) -> Result<(), GridError> {
        if !self.known_ids.contains(&id) {
            return Err(GridError::RowNotFound(id));
        }
        if self.is_editing(id, field) {
            return Ok(());
        }

        self.displaced = self.editing.take();
        self.editing = Some(EditingCell::new(id, field));

        if let Some(position) = self.visible_ids.iter().position(|&visible| visible == id) {
            self.pager.show_position(position);
        }
        Ok(())
    }
}
