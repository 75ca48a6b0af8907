//! Members panel: toolbar, table and pagination bar.

use egui::{Response, Ui};
use log::debug;
use roster_business::{
    FetchService, GridHandle, GridState, RosterRows, apply_row_action, delete_selected,
};

use super::pagination::render_pagination;
use super::state::MembersPanelState;
use super::table::{TableEvent, members_table};
use super::toolbar::render_toolbar;

pub const EMPTY_LABEL: &str = "No Rows To Show";

/// Displays the members panel.
///
/// The first call starts the members request; later calls only apply its
/// result once it arrives.
pub fn members_panel(
    ui: &mut Ui,
    state: &mut MembersPanelState,
    fetcher: &dyn FetchService,
    members_url: &str,
) -> Response {
    let MembersPanelState { rows, grid, loader } = state;

    loader.poll(rows);
    let ctx = ui.ctx().clone();
    loader.start(fetcher, members_url, move || ctx.request_repaint());

    ui.vertical(|ui| {
        let visible = grid.sync(rows);

        let toolbar = render_toolbar(ui, grid, loader.status(), rows.len());
        ui.add_space(8.0);

        let events = members_table(ui, rows, grid, &visible);
        if visible.is_empty() && !loader.status().is_pending() {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.weak(EMPTY_LABEL);
            });
        }

        ui.add_space(4.0);
        render_pagination(ui, grid.pager_mut(), visible.len());

        // Apply everything after rendering so the frame saw one consistent
        // collection.
        if let Some(search) = toolbar.search {
            grid.set_quick_filter(search);
        }
        if toolbar.delete_selected {
            delete_selected(rows, grid);
        }
        apply_table_events(rows, grid, events);
    })
    .response
}

fn apply_table_events(rows: &mut RosterRows, grid: &mut GridState, events: Vec<TableEvent>) {
    for event in events {
        match event {
            TableEvent::ToggleRow(id) => grid.toggle_selected(id),
            TableEvent::ToggleAll => grid.toggle_all_visible(),
            TableEvent::CycleSort(field) => grid.cycle_sort(field),
            TableEvent::ColumnFilter(field, text) => grid.set_column_filter(field, text),
            TableEvent::BeginEdit(id, field) => {
                if let Err(err) = grid.begin_edit(id, field) {
                    debug!("Ignoring edit request: {err}");
                }
            }
            TableEvent::CommitEdit(id, field) => {
                if grid.is_editing(id, field) {
                    grid.commit_edit(rows);
                }
            }
            TableEvent::CancelEdit(id, field) => {
                if grid.is_editing(id, field) {
                    grid.cancel_edit();
                }
            }
            TableEvent::Row(action) => apply_row_action(rows, grid, action),
        }
    }
}
