//! Row rendering for the members table.

use egui_extras::TableRow;
use roster_business::{GridState, Member, MemberField};

use super::TableEvent;
use super::cells::{
    EditorOutcome, render_action_buttons, render_editor_cell, render_select_cell,
    render_value_cell,
};

/// Renders one member: checkbox, the three data cells and the action buttons.
///
/// The action buttons are derived from `member.id` here; they are not part of
/// the member.
#[inline]
pub fn render_member_row(
    row: &mut TableRow<'_, '_>,
    member: &Member,
    grid: &mut GridState,
    events: &mut Vec<TableEvent>,
) {
    let id = member.id;

    row.col(|ui| {
        if render_select_cell(ui, grid.selection().contains(id)) {
            events.push(TableEvent::ToggleRow(id));
        }
    });

    for field in MemberField::ALL {
        row.col(|ui| match grid.editing_mut() {
            Some(cell) if cell.is_at(id, field) => match render_editor_cell(ui, cell) {
                EditorOutcome::Commit => events.push(TableEvent::CommitEdit(id, field)),
                EditorOutcome::Cancel => events.push(TableEvent::CancelEdit(id, field)),
                EditorOutcome::Editing => {}
            },
            _ => {
                if render_value_cell(ui, member.field(field)) {
                    events.push(TableEvent::BeginEdit(id, field));
                }
            }
        });
    }

    row.col(|ui| {
        if let Some(action) = render_action_buttons(ui, id) {
            events.push(TableEvent::Row(action));
        }
    });
}
