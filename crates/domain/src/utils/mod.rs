//! Small pure helpers shared by the domain types

pub mod dates;
pub mod file_size;

pub use dates::parse_calendar_date;
pub use file_size::format_file_size;
