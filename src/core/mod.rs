pub mod add;
pub mod board;
pub mod checker;
pub mod conflicts;
pub mod del;
pub mod edit;
pub mod filter;
pub mod filter_state;
pub mod list;
pub mod log;
pub mod source;

pub use board::EventBoard;
pub use checker::{CheckStatus, CheckTicket, ConflictChecker};
pub use conflicts::{ConflictPreview, ConflictQuery, ConflictReport, detect, find_conflicts, overlaps};
pub use filter::{apply_filters, apply_filters_at};
pub use filter_state::EventFilters;
pub use source::EventSource;
