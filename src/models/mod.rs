pub mod event;
pub mod event_type;
pub mod filter;
pub mod visibility;

pub use event::Event;
pub use event_type::EventType;
pub use filter::{FilterState, SortOrder, StatusFilter, TeamScope, TypeFilter};
pub use visibility::Visibility;
