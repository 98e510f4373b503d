use crate::days::{DAYS, Day};
use crate::feedback::Notification;
use crate::timer::Thymer;
use crate::timesheet::{Submission, TimesheetForm, format_total};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// `weekday` follows the browser's `Date.getDay()`: 0 is Sunday, 6 is Saturday.
#[derive(Debug, Default, Deserialize)]
pub struct TimerToggleRequest {
    #[serde(default)]
    pub weekday: Option<u8>,
}

#[derive(Debug, Deserialize)]
pub struct HoursRequest {
    pub day: String,
    #[serde(default)]
    pub value: String,
}

/// `tip` is the raw amount from the dialog; absent or null means "skip".
#[derive(Debug, Default, Deserialize)]
pub struct SubmitRequest {
    #[serde(default)]
    pub tip: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DayView {
    pub day: Day,
    pub short: &'static str,
    pub value: String,
    pub notification: Notification,
}

#[derive(Debug, Serialize)]
pub struct TimerView {
    pub running: bool,
    pub started_at_ms: Option<i64>,
    pub elapsed_hours: f64,
}

#[derive(Debug, Serialize)]
pub struct TimesheetResponse {
    pub days: Vec<DayView>,
    pub total_hours: f64,
    pub total_display: String,
    pub timer: TimerView,
    pub cumulative_hours: f64,
    pub acknowledgement: Option<String>,
    /// Milliseconds left before the acknowledgement should be cleared.
    pub acknowledgement_ms: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct HoursResponse {
    pub day: DayView,
    pub total_hours: f64,
    pub total_display: String,
}

#[derive(Debug, Serialize)]
pub struct TimerToggleResponse {
    pub timer: TimerView,
    pub updated_day: Option<DayView>,
    pub total_hours: f64,
    pub total_display: String,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub submitted_hours: f64,
    pub cumulative_hours: f64,
    pub tip: Option<f64>,
    pub acknowledgement: String,
    pub acknowledgement_ms: u64,
}

#[derive(Debug, Serialize)]
pub struct ReminderResponse {
    pub message: String,
}

pub fn day_view(form: &TimesheetForm, day: Day) -> DayView {
    DayView {
        day,
        short: day.label().short,
        value: form.hours(day).unwrap_or_default().to_string(),
        notification: form.notification(day),
    }
}

pub fn timer_view(thymer: &Thymer, now: DateTime<Utc>) -> TimerView {
    TimerView {
        running: thymer.is_running(),
        started_at_ms: thymer.started_at().map(|at| at.timestamp_millis()),
        elapsed_hours: thymer.elapsed_hours(now),
    }
}

pub fn timesheet_response(
    form: &TimesheetForm,
    cumulative_hours: f64,
    now: DateTime<Utc>,
    instant: Instant,
) -> TimesheetResponse {
    let total_hours = form.total_hours();
    TimesheetResponse {
        days: DAYS.into_iter().map(|day| day_view(form, day)).collect(),
        total_hours,
        total_display: format_total(total_hours),
        timer: timer_view(form.thymer(), now),
        cumulative_hours,
        acknowledgement: form.acknowledgement(instant).map(str::to_string),
        acknowledgement_ms: form
            .acknowledgement_remaining(instant)
            .map(|remaining| remaining.as_millis() as u64),
    }
}

impl From<Submission> for SubmitResponse {
    fn from(submission: Submission) -> Self {
        Self {
            submitted_hours: submission.submitted_hours,
            cumulative_hours: submission.cumulative_hours,
            tip: submission.tip,
            acknowledgement: submission.acknowledgement,
            acknowledgement_ms: crate::timesheet::ACKNOWLEDGEMENT_WINDOW.as_millis() as u64,
        }
    }
}
