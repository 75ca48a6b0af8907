//! Domain layer of the roster admin table: member records, the row
//! collection, grid view state, row operations and the members data source.

mod actions;
mod config;
mod fetch_members;
pub mod fetch_service;
mod grid;
mod member;
mod rows;

pub use actions::{RowAction, apply_row_action, delete_row, delete_selected, start_editing};
pub use config::{BusinessConfig, DEFAULT_MEMBERS_URL};
pub use fetch_members::{
    FetchError, FetchMembersResult, LoadStatus, MembersLoader, fetch_members,
    parse_members_response,
};
#[cfg(any(test, feature = "test-utils"))]
pub use fetch_service::MockFetcher;
pub use fetch_service::{EhttpFetcher, FetchService};
pub use grid::{
    EditingCell, GridError, GridHandle, GridState, HeaderCheck, PAGE_SIZE, Pager, RowQuery,
    Selection, SortDirection, SortSpec,
};
pub use member::{Member, MemberField, MemberId};
pub use rows::RosterRows;
