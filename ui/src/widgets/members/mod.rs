//! Admin members table.
//!
//! The panel loads the member list once, the first time it is shown, and
//! then works on that local copy: search, per-column filters and sorting,
//! checkbox selection with bulk delete, inline editing and pagination.

mod panel;
mod state;

pub mod pagination;
pub mod table;
pub mod toolbar;

pub use panel::{EMPTY_LABEL, members_panel};
pub use state::MembersPanelState;
