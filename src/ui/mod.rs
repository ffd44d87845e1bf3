pub mod day_cell;
pub mod dialogs;
pub mod gesture;
pub mod header;
pub mod month_view;
pub mod theme;
pub mod toolbar;
pub mod week_view;
