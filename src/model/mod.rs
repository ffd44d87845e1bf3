pub mod grid;
pub mod view_state;
pub mod window;

pub use grid::{CalendarDate, MonthPage};
pub use view_state::{ViewMode, ViewState};
pub use window::{MonthWindow, ScrollJump, WeekWindow};
