//! State owned by the members panel.

use roster_business::{GridState, MembersLoader, RosterRows};

/// Everything the members panel owns: the row collection, the grid handle
/// and the mount-time loader.
///
/// Dropping this drops the grid handle and the loader's receiving end, so a
/// fetch finishing after the panel is gone is discarded.
#[derive(Debug, Default)]
pub struct MembersPanelState {
    pub rows: RosterRows,
    pub grid: GridState,
    pub loader: MembersLoader,
}

impl MembersPanelState {
    pub fn new() -> Self {
        Self::default()
    }
}
