//! Grid view state for the members table.
//!
//! - `handle`: the typed capability the edit/delete operations consume
//! - `query`: sorting, search box and column filters
//! - `pager`: fixed-size pagination
//! - `selection`: checkbox selection
//! - `editing`: the open cell editor
//! - `state`: `GridState`, tying the above together

mod editing;
mod handle;
mod pager;
mod query;
mod selection;
mod state;

pub use editing::EditingCell;
pub use handle::{GridError, GridHandle};
pub use pager::{PAGE_SIZE, Pager};
pub use query::{RowQuery, SortDirection, SortSpec};
pub use selection::{HeaderCheck, Selection};
pub use state::GridState;
