//! Table view-model and dialog state
//!
//! Everything here is synchronous and in-memory: the view is derived within
//! one interaction turn, with no suspension point and no network access.

mod column;
mod dialog;
mod state;
mod table;

pub use column::*;
pub use dialog::*;
pub use state::*;
pub use table::*;
