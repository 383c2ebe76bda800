pub mod detail_pane;
pub mod help_modal;
pub mod schedule_grid;

pub use detail_pane::DetailPane;
pub use help_modal::HelpModal;
pub use schedule_grid::ScheduleGrid;
