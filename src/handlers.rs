use crate::cumulative::{read_cumulative, write_cumulative};
use crate::days::Day;
use crate::errors::AppError;
use crate::messages::reminder_message;
use crate::models::{
    HoursRequest, HoursResponse, ReminderResponse, SubmitRequest, SubmitResponse,
    TimerToggleRequest, TimerToggleResponse, TimerView, TimesheetResponse, day_view, timer_view, timesheet_response,
};
use crate::state::AppState;
use crate::timer::TimerToggle;
use crate::timesheet::format_total;
use crate::ui::render_index;
use axum::{
    Json,
    extract::State,
    response::{Html, Redirect},
};
use axum_extra::extract::CookieJar;
use chrono::Utc;
use std::time::Instant;
use tracing::{debug, info, warn};

pub async fn index(State(state): State<AppState>, jar: CookieJar) -> Html<String> {
    let form = state.form.lock().await;
    let snapshot = timesheet_response(&form, read_cumulative(&jar), Utc::now(), Instant::now());
    Html(render_index(&snapshot, state.config.reminder_interval))
}

pub async fn get_timesheet(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<TimesheetResponse>, AppError> {
    let form = state.form.lock().await;
    Ok(Json(timesheet_response(
        &form,
        read_cumulative(&jar),
        Utc::now(),
        Instant::now(),
    )))
}

pub async fn set_hours(
    State(state): State<AppState>,
    Json(payload): Json<HoursRequest>,
) -> Result<Json<HoursResponse>, AppError> {
    let day = payload.day.parse::<Day>().map_err(AppError::bad_request)?;

    let mut form = state.form.lock().await;
    form.set_hours(day, &payload.value, &mut rand::thread_rng());
    debug!(%day, value = %payload.value, "hours updated");

    let total_hours = form.total_hours();
    Ok(Json(HoursResponse {
        day: day_view(&form, day),
        total_hours,
        total_display: format_total(total_hours),
    }))
}

pub async fn get_timer(State(state): State<AppState>) -> Result<Json<TimerView>, AppError> {
    let form = state.form.lock().await;
    Ok(Json(timer_view(form.thymer(), Utc::now())))
}

/// The body is optional; without the browser's weekday the server clock decides.
pub async fn toggle_timer(
    State(state): State<AppState>,
    payload: Option<Json<TimerToggleRequest>>,
) -> Result<Json<TimerToggleResponse>, AppError> {
    let weekday = payload.and_then(|Json(request)| request.weekday);
    Ok(Json(apply_timer_toggle(&state, today_from(weekday)).await))
}

pub async fn toggle_timer_form(State(state): State<AppState>) -> Redirect {
    apply_timer_toggle(&state, Day::today()).await;
    Redirect::to("/")
}

pub async fn copy_last_week(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<TimesheetResponse>, AppError> {
    Ok(Json(
        apply_copy_last_week(&state, read_cumulative(&jar)).await,
    ))
}

pub async fn copy_last_week_form(State(state): State<AppState>) -> Redirect {
    apply_copy_last_week(&state, 0.0).await;
    Redirect::to("/")
}

pub async fn submit(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<SubmitRequest>,
) -> Result<(CookieJar, Json<SubmitResponse>), AppError> {
    let tip = parse_tip(payload.tip.as_deref());
    let cumulative = read_cumulative(&jar);

    let mut form = state.form.lock().await;
    let submission = form.submit(tip, cumulative, Instant::now(), &mut rand::thread_rng());
    info!(
        hours = submission.submitted_hours,
        tip = ?submission.tip,
        cumulative = submission.cumulative_hours,
        "timesheet submitted"
    );

    let jar = write_cumulative(jar, submission.cumulative_hours);
    Ok((jar, Json(submission.into())))
}

pub async fn get_reminder() -> Json<ReminderResponse> {
    let message = reminder_message(&mut rand::thread_rng());
    debug!(%message, "reminder picked");
    Json(ReminderResponse { message })
}

async fn apply_copy_last_week(state: &AppState, cumulative: f64) -> TimesheetResponse {
    let mut form = state.form.lock().await;
    form.copy_last_week(&mut rand::thread_rng());
    info!(total = form.total_hours(), "copied last week");

    timesheet_response(&form, cumulative, Utc::now(), Instant::now())
}

fn today_from(weekday: Option<u8>) -> Day {
    match weekday.map(|index| (index, Day::from_js_weekday(index))) {
        Some((_, Some(day))) => day,
        Some((index, None)) => {
            warn!("ignoring invalid weekday index {index}, using server clock");
            Day::today()
        }
        None => Day::today(),
    }
}

async fn apply_timer_toggle(state: &AppState, today: Day) -> TimerToggleResponse {
    let now = Utc::now();
    let mut form = state.form.lock().await;
    let outcome = form.toggle_timer(now, today, &mut rand::thread_rng());

    match outcome.toggle {
        TimerToggle::Started { started_at } => info!(%started_at, "thymer started"),
        TimerToggle::Stopped { elapsed_hours } => {
            info!(elapsed_hours, day = ?outcome.updated_day, "thymer stopped")
        }
    }

    let total_hours = form.total_hours();
    TimerToggleResponse {
        timer: timer_view(form.thymer(), now),
        updated_day: outcome.updated_day.map(|day| day_view(&form, day)),
        total_hours,
        total_display: format_total(total_hours),
    }
}

/// A tip that is blank or not a usable amount is treated as skipping.
fn parse_tip(raw: Option<&str>) -> Option<f64> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }

    match raw.trim_start_matches('$').parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount >= 0.0 => Some(amount),
        _ => {
            warn!("ignoring invalid tip amount: {raw:?}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tip_accepts_preset_and_custom_amounts() {
        assert_eq!(parse_tip(Some("5")), Some(5.0));
        assert_eq!(parse_tip(Some(" $10 ")), Some(10.0));
        assert_eq!(parse_tip(Some("3.75")), Some(3.75));
    }

    #[test]
    fn browser_weekday_wins_over_server_clock() {
        assert_eq!(today_from(Some(0)), Day::Sunday);
        assert_eq!(today_from(Some(3)), Day::Wednesday);
        assert_eq!(today_from(Some(9)), Day::today());
        assert_eq!(today_from(None), Day::today());
    }

    #[test]
    fn parse_tip_treats_junk_as_skip() {
        assert_eq!(parse_tip(None), None);
        assert_eq!(parse_tip(Some("")), None);
        assert_eq!(parse_tip(Some("a hug")), None);
        assert_eq!(parse_tip(Some("-2")), None);
        assert_eq!(parse_tip(Some("NaN")), None);
    }
}
