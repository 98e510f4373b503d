pub mod app;
pub mod config;
pub mod cumulative;
pub mod days;
pub mod errors;
pub mod feedback;
pub mod handlers;
pub mod messages;
pub mod models;
pub mod state;
pub mod timer;
pub mod timesheet;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use timesheet::TimesheetForm;
