//! Pagination bar below the members table. Page size is fixed at
//! [`roster_business::PAGE_SIZE`].

use egui::Ui;
use roster_business::Pager;

/// Renders the bar and moves `pager` when a button is clicked.
#[inline]
pub fn render_pagination(ui: &mut Ui, pager: &mut Pager, total: usize) {
    ui.horizontal(|ui| {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // Right-to-left, so the controls are added last to first.
            if ui
                .add_enabled(pager.has_next(total), egui::Button::new("Last »"))
                .clicked()
            {
                pager.last(total);
            }
            if ui
                .add_enabled(pager.has_next(total), egui::Button::new("Next ›"))
                .clicked()
            {
                pager.next(total);
            }
            ui.label(format!(
                "Page {} of {}",
                pager.page() + 1,
                Pager::page_count(total)
            ));
            if ui
                .add_enabled(pager.has_previous(), egui::Button::new("‹ Prev"))
                .clicked()
            {
                pager.previous();
            }
            if ui
                .add_enabled(pager.has_previous(), egui::Button::new("« First"))
                .clicked()
            {
                pager.first();
            }

            ui.add_space(16.0);
            ui.label(range_label(pager, total));
        });
    });
}

/// "11 to 20 of 46", or "0 to 0 of 0" for an empty grid.
fn range_label(pager: &Pager, total: usize) -> String {
    let range = pager.range(total);
    if range.is_empty() {
        format!("0 to 0 of {total}")
    } else {
        format!("{} to {} of {total}", range.start + 1, range.end)
    }
}
