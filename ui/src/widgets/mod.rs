pub mod members;

pub use members::{EMPTY_LABEL, MembersPanelState, members_panel};
