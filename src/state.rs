use crate::config::Config;
use crate::timesheet::TimesheetForm;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub form: Arc<Mutex<TimesheetForm>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            form: Arc::new(Mutex::new(TimesheetForm::new())),
        }
    }
}
