//! Members table.
//!
//! - `columns`: column definitions and sizes
//! - `header`: select-all checkbox, sortable labels, column filters
//! - `row`: one member row
//! - `cells`: individual cell renderers
//!
//! Rendering never mutates the row collection. Everything the user did is
//! returned as [`TableEvent`]s and applied by the panel after the table.

pub mod cells;
pub mod columns;
pub mod header;
pub mod row;

use egui::{Align, Layout, Ui};
use egui_extras::TableBuilder;
use roster_business::{GridState, MemberField, MemberId, RosterRows, RowAction};

use columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};

/// Something the user did inside the table this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    ToggleRow(MemberId),
    ToggleAll,
    CycleSort(MemberField),
    ColumnFilter(MemberField, String),
    BeginEdit(MemberId, MemberField),
    CommitEdit(MemberId, MemberField),
    CancelEdit(MemberId, MemberField),
    Row(RowAction),
}

/// Renders the current page of `visible` rows.
pub fn members_table(
    ui: &mut Ui,
    rows: &RosterRows,
    grid: &mut GridState,
    visible: &[usize],
) -> Vec<TableEvent> {
    let mut events = Vec::new();
    let page = grid.pager().range(visible.len());
    let page_rows = &visible[page];

    let mut table = TableBuilder::new(ui)
        .id_salt("members_table")
        .striped(true)
        .resizable(true)
        .vscroll(false)
        .cell_layout(Layout::left_to_right(Align::Center));
    for column in table_columns() {
        table = table.column(column);
    }

    table
        .header(HEADER_HEIGHT, |mut header| {
            header::render_table_header(&mut header, grid, &mut events);
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, page_rows.len(), |mut table_row| {
                let Some(member) = rows.get(page_rows[table_row.index()]) else {
                    return;
                };
                row::render_member_row(&mut table_row, member, grid, &mut events);
            });
        });

    events
}
