//! The timesheet form: hours typed per day, the feedback derived from them,
//! the Thymer, and the transient acknowledgement shown after a submission.

use crate::days::{DAYS, Day};
use crate::feedback::{Notification, derive_notification, parse_hours};
use crate::messages::{self, format_decimal};
use crate::timer::{Thymer, TimerToggle};
use chrono::{DateTime, Utc};
use rand::Rng;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

pub const ACKNOWLEDGEMENT_WINDOW: Duration = Duration::from_secs(3);

const COPY_MIN_HOURS: f64 = 6.0;
const COPY_STEP: f64 = 0.5;
/// Number of half-hour steps between 6.0 and 16.0 inclusive.
const COPY_STEPS: u32 = 20;
/// Thymer sessions are credited to the nearest hundredth of an hour.
const TIMER_PLACES: usize = 2;

#[derive(Debug, Clone)]
pub struct Acknowledgement {
    pub message: String,
    pub shown_at: Instant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub submitted_hours: f64,
    pub cumulative_hours: f64,
    pub tip: Option<f64>,
    pub acknowledgement: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimerOutcome {
    pub toggle: TimerToggle,
    /// The day that received the elapsed hours, when the Thymer stopped.
    pub updated_day: Option<Day>,
}

#[derive(Debug, Default)]
pub struct TimesheetForm {
    hours: BTreeMap<Day, String>,
    notifications: BTreeMap<Day, Notification>,
    thymer: Thymer,
    acknowledgement: Option<Acknowledgement>,
}

impl TimesheetForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hours(&self, day: Day) -> Option<&str> {
        self.hours.get(&day).map(String::as_str)
    }

    pub fn notification(&self, day: Day) -> Notification {
        self.notifications.get(&day).cloned().unwrap_or_default()
    }

    pub fn thymer(&self) -> &Thymer {
        &self.thymer
    }

    pub fn is_empty(&self) -> bool {
        self.hours.is_empty() && self.notifications.is_empty()
    }

    /// Records typed text for one day and re-derives that day's notification.
    pub fn set_hours<R: Rng + ?Sized>(&mut self, day: Day, raw: &str, rng: &mut R) {
        if raw.trim().is_empty() {
            self.hours.remove(&day);
        } else {
            self.hours.insert(day, raw.to_string());
        }

        match parse_hours(raw) {
            Some(value) => {
                self.notifications
                    .insert(day, derive_notification(value, rng));
            }
            None => {
                self.notifications.remove(&day);
            }
        }
    }

    pub fn total_hours(&self) -> f64 {
        self.hours
            .values()
            .map(|raw| parse_hours(raw).unwrap_or(0.0))
            .fold(0.0, |sum, value| sum + value)
    }

    pub fn toggle_timer<R: Rng + ?Sized>(
        &mut self,
        now: DateTime<Utc>,
        today: Day,
        rng: &mut R,
    ) -> TimerOutcome {
        let toggle = self.thymer.toggle(now);
        let updated_day = match toggle {
            TimerToggle::Started { .. } => None,
            TimerToggle::Stopped { elapsed_hours } => {
                let elapsed = round_to(elapsed_hours, TIMER_PLACES);
                if elapsed <= 0.0 {
                    None
                } else {
                    let raw = self.hours(today).unwrap_or_default();
                    let current = parse_hours(raw).unwrap_or(0.0);
                    let places = decimal_places(raw).max(TIMER_PLACES);
                    let updated = format_decimal(current + elapsed, places);
                    self.set_hours(today, &updated, rng);
                    Some(today)
                }
            }
        };

        TimerOutcome {
            toggle,
            updated_day,
        }
    }

    /// Replaces the whole week with plausible-looking random hours.
    pub fn copy_last_week<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.hours.clear();
        self.notifications.clear();
        for day in DAYS {
            let value = random_hours(rng);
            self.set_hours(day, &format!("{value:.1}"), rng);
        }
    }

    /// Folds the week into the cumulative total and clears the form.
    ///
    /// Confirming with a tip and skipping have the same effect on hours; the tip
    /// only changes the acknowledgement line.
    pub fn submit<R: Rng + ?Sized>(
        &mut self,
        tip: Option<f64>,
        cumulative_hours: f64,
        now: Instant,
        rng: &mut R,
    ) -> Submission {
        let submitted_hours = self.total_hours();
        let acknowledgement = messages::acknowledgement_message(tip, rng);

        self.hours.clear();
        self.notifications.clear();
        self.acknowledgement = Some(Acknowledgement {
            message: acknowledgement.clone(),
            shown_at: now,
        });

        Submission {
            submitted_hours,
            cumulative_hours: cumulative_hours + submitted_hours,
            tip,
            acknowledgement,
        }
    }

    pub fn acknowledgement(&self, now: Instant) -> Option<&str> {
        self.acknowledgement
            .as_ref()
            .filter(|ack| now.saturating_duration_since(ack.shown_at) < ACKNOWLEDGEMENT_WINDOW)
            .map(|ack| ack.message.as_str())
    }

    /// Time left before the acknowledgement disappears.
    pub fn acknowledgement_remaining(&self, now: Instant) -> Option<Duration> {
        let ack = self.acknowledgement.as_ref()?;
        ACKNOWLEDGEMENT_WINDOW
            .checked_sub(now.saturating_duration_since(ack.shown_at))
            .filter(|remaining| !remaining.is_zero())
    }
}

pub fn random_hours<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    COPY_MIN_HOURS + f64::from(rng.gen_range(0..=COPY_STEPS)) * COPY_STEP
}

fn round_to(value: f64, places: usize) -> f64 {
    let scale = 10f64.powi(places as i32);
    (value * scale).round() / scale
}

/// Digits after the decimal point in text the user typed.
fn decimal_places(raw: &str) -> usize {
    raw.trim()
        .split_once('.')
        .map(|(_, fraction)| fraction.chars().take_while(char::is_ascii_digit).count())
        .unwrap_or(0)
}

pub fn format_total(total: f64) -> String {
    format!("{total:.1} hrs")
}
