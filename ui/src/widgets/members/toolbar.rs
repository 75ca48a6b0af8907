//! Toolbar above the members table: search box, status and bulk delete.

use egui::{Button, RichText, TextEdit, Ui};
use roster_business::{GridState, LoadStatus};

use crate::utils::colors::COLOR_RED;

pub const SEARCH_HINT: &str = "Search";
pub const BULK_DELETE_LABEL: &str = "🗑 Delete selected";

/// What the toolbar asked for this frame.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ToolbarResult {
    /// New search text, when it changed.
    pub search: Option<String>,
    pub delete_selected: bool,
}

#[inline]
pub fn render_toolbar(
    ui: &mut Ui,
    grid: &GridState,
    status: &LoadStatus,
    row_count: usize,
) -> ToolbarResult {
    let mut result = ToolbarResult::default();

    ui.horizontal(|ui| {
        let mut search = grid.query().quick_filter().to_owned();
        let response = ui.add(
            TextEdit::singleline(&mut search)
                .id_salt("members_search")
                .hint_text(SEARCH_HINT)
                .desired_width(280.0),
        );
        if response.changed() {
            result.search = Some(search);
        }

        render_status(ui, status, row_count);

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let delete = Button::new(RichText::new(BULK_DELETE_LABEL).color(egui::Color32::WHITE))
                .fill(COLOR_RED);
            result.delete_selected = ui
                .add(delete)
                .on_hover_text("Delete all ticked rows")
                .clicked();

            let selected = grid.selection().len();
            if selected > 0 {
                ui.label(format!("{selected} selected"));
            }
        });
    });

    result
}

fn render_status(ui: &mut Ui, status: &LoadStatus, row_count: usize) {
    match status {
        LoadStatus::Pending => {
            ui.spinner();
            ui.label("Loading members...");
        }
        LoadStatus::Loaded { at, .. } => {
            ui.weak(format!(
                "{row_count} members, loaded at {}",
                at.format("%H:%M:%S")
            ));
        }
        // A failed load is only logged; the grid just stays empty.
        LoadStatus::Idle | LoadStatus::Failed(_) => {}
    }
}
