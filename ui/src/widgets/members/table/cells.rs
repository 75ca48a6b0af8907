//! Cell renderers for the members table.

use egui::{Button, Key, Label, RichText, Sense, TextEdit, Ui};
use roster_business::{EditingCell, MemberId, RowAction};

use crate::utils::colors::{COLOR_BLUE, COLOR_RED};

pub const EDIT_ROW_LABEL: &str = "✏";
pub const DELETE_ROW_LABEL: &str = "🗑";

/// What happened in an open editor this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorOutcome {
    Editing,
    Commit,
    Cancel,
}

/// Row checkbox. Returns `true` when toggled.
#[inline]
pub fn render_select_cell(ui: &mut Ui, selected: bool) -> bool {
    let mut checked = selected;
    ui.checkbox(&mut checked, "").changed()
}

/// Read-only cell value. Returns `true` on double-click.
#[inline]
pub fn render_value_cell(ui: &mut Ui, value: &str) -> bool {
    ui.add(Label::new(value).truncate().sense(Sense::click()))
        .on_hover_text("Double-click to edit")
        .double_clicked()
}

/// Inline editor for the cell being edited.
///
/// `Enter` or clicking elsewhere commits, `Escape` cancels.
#[inline]
pub fn render_editor_cell(ui: &mut Ui, cell: &mut EditingCell) -> EditorOutcome {
    let response = ui.add(
        TextEdit::singleline(&mut cell.buffer)
            .id_salt(("cell_editor", cell.id.as_str(), cell.field.key()))
            .desired_width(f32::INFINITY),
    );

    if cell.take_focus_request() {
        response.request_focus();
    }

    if response.lost_focus() {
        if ui.input(|input| input.key_pressed(Key::Escape)) {
            EditorOutcome::Cancel
        } else {
            EditorOutcome::Commit
        }
    } else {
        EditorOutcome::Editing
    }
}

/// Edit and delete buttons for a row.
///
/// Returns the action to apply if any button was clicked.
#[inline]
pub fn render_action_buttons(ui: &mut Ui, id: MemberId) -> Option<RowAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        if ui
            .add(Button::new(RichText::new(EDIT_ROW_LABEL).color(COLOR_BLUE)))
            .on_hover_text("Edit")
            .clicked()
        {
            action = Some(RowAction::Edit(id));
        }
        if ui
            .add(Button::new(RichText::new(DELETE_ROW_LABEL).color(COLOR_RED)))
            .on_hover_text("Delete")
            .clicked()
        {
            action = Some(RowAction::Delete(id));
        }
    });

    action
}
