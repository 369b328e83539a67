pub mod block;
pub mod schedule;
pub mod theme;

pub use block::AvailabilityBlock;
pub use schedule::{Schedule, date_key, sort_by_start, start_of_day};
pub use theme::{ResolvedTheme, Theme};
