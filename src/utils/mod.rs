pub mod logging;
pub mod table;
pub mod time;
