pub mod conflicts;
pub mod events;
pub mod messages;
