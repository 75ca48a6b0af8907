//! Table header: select-all checkbox, sortable column labels and filter boxes.

use egui::{Button, Checkbox, RichText, TextEdit, Ui};
use egui_extras::TableRow;
use roster_business::{GridState, HeaderCheck, MemberField, SortDirection, SortSpec};

use super::TableEvent;

const ACTION_LABEL: &str = "Action";

/// Renders the header row.
#[inline]
pub fn render_table_header(
    header: &mut TableRow<'_, '_>,
    grid: &GridState,
    events: &mut Vec<TableEvent>,
) {
    header.col(|ui| {
        if render_select_all(ui, grid.header_check()) {
            events.push(TableEvent::ToggleAll);
        }
    });

    for field in MemberField::ALL {
        header.col(|ui| {
            render_data_header(ui, field, grid, events);
        });
    }

    header.col(|ui| {
        ui.strong(ACTION_LABEL);
    });
}

/// Returns `true` when the checkbox was clicked.
fn render_select_all(ui: &mut Ui, check: HeaderCheck) -> bool {
    let mut checked = check == HeaderCheck::Checked;
    ui.add(Checkbox::new(&mut checked, "").indeterminate(check == HeaderCheck::Partial))
        .on_hover_text("Select all")
        .clicked()
}

fn render_data_header(
    ui: &mut Ui,
    field: MemberField,
    grid: &GridState,
    events: &mut Vec<TableEvent>,
) {
    ui.vertical(|ui| {
        let label = header_label(field, grid.query().sort());
        if ui
            .add(Button::new(RichText::new(label).strong()).frame(false))
            .on_hover_text("Sort")
            .clicked()
        {
            events.push(TableEvent::CycleSort(field));
        }

        let mut filter = grid.query().column_filter(field).to_owned();
        let response = ui.add(
            TextEdit::singleline(&mut filter)
                .id_salt(("column_filter", field.key()))
                .hint_text("Filter…")
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            events.push(TableEvent::ColumnFilter(field, filter));
        }
    });
}

/// Column label with the sort arrow when the column is sorted.
fn header_label(field: MemberField, sort: Option<SortSpec>) -> String {
    match sort {
        Some(SortSpec {
            field: sorted,
            direction,
        }) if sorted == field => {
            let arrow = match direction {
                SortDirection::Ascending => "⏶",
                SortDirection::Descending => "⏷",
            };
            format!("{} {arrow}", field.label())
        }
        _ => field.label().to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_only_on_sorted_column() {
        let sort = Some(SortSpec {
            field: MemberField::Email,
            direction: SortDirection::Descending,
        });

        assert_eq!(header_label(MemberField::Email, sort), "Email ⏷");
        assert_eq!(header_label(MemberField::Name, sort), "Name");
        assert_eq!(header_label(MemberField::Role, None), "Role");
    }
}
