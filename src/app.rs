use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/timer/toggle", post(handlers::toggle_timer_form))
        .route("/week/copy", post(handlers::copy_last_week_form))
        .route("/api/timesheet", get(handlers::get_timesheet))
        .route("/api/hours", post(handlers::set_hours))
        .route("/api/timer", get(handlers::get_timer))
        .route("/api/timer/toggle", post(handlers::toggle_timer))
        .route("/api/week/copy", post(handlers::copy_last_week))
        .route("/api/submit", post(handlers::submit))
        .route("/api/reminder", get(handlers::get_reminder))
        .with_state(state)
}
