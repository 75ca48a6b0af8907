//! Column definitions for the members table.

use egui_extras::Column;

pub const SELECT_WIDTH: f32 = 36.0;
pub const ROLE_WIDTH: f32 = 120.0;
pub const ACTIONS_WIDTH: f32 = 90.0;
pub const ROW_HEIGHT: f32 = 30.0;
/// Label plus filter box.
pub const HEADER_HEIGHT: f32 = 52.0;

/// Columns in order: select, name, email, role, action.
#[inline]
pub fn table_columns() -> Vec<Column> {
    vec![
        Column::exact(SELECT_WIDTH),
        Column::remainder().at_least(120.0).resizable(true),
        Column::remainder().at_least(160.0).resizable(true),
        Column::initial(ROLE_WIDTH).at_least(80.0).resizable(true),
        Column::exact(ACTIONS_WIDTH),
    ]
}
