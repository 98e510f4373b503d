use chrono::{DateTime, Utc};

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// The Thymer stopwatch. Only lives in memory; a restart drops a running session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Thymer {
    #[default]
    Idle,
    Running { started_at: DateTime<Utc> },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimerToggle {
    Started { started_at: DateTime<Utc> },
    Stopped { elapsed_hours: f64 },
}

impl Thymer {
    pub fn is_running(&self) -> bool {
        matches!(self, Thymer::Running { .. })
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        match self {
            Thymer::Idle => None,
            Thymer::Running { started_at } => Some(*started_at),
        }
    }

    pub fn elapsed_hours(&self, now: DateTime<Utc>) -> f64 {
        match self {
            Thymer::Idle => 0.0,
            Thymer::Running { started_at } => {
                let millis = (now - *started_at).num_milliseconds().max(0);
                millis as f64 / MILLIS_PER_HOUR
            }
        }
    }

    pub fn toggle(&mut self, now: DateTime<Utc>) -> TimerToggle {
        match *self {
            Thymer::Idle => {
                *self = Thymer::Running { started_at: now };
                TimerToggle::Started { started_at: now }
            }
            Thymer::Running { .. } => {
                let elapsed_hours = self.elapsed_hours(now);
                *self = Thymer::Idle;
                TimerToggle::Stopped { elapsed_hours }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn toggle_cycles_between_idle_and_running() {
        let start = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap();
        let mut thymer = Thymer::default();
        assert!(!thymer.is_running());

        assert_eq!(thymer.toggle(start), TimerToggle::Started { started_at: start });
        assert!(thymer.is_running());
        assert_eq!(thymer.started_at(), Some(start));

        let stop = start + Duration::minutes(45);
        assert_eq!(thymer.toggle(stop), TimerToggle::Stopped { elapsed_hours: 0.75 });
        assert_eq!(thymer, Thymer::Idle);
        assert_eq!(thymer.elapsed_hours(stop), 0.0);
    }

    #[test]
    fn elapsed_never_goes_negative() {
        let start = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap();
        let thymer = Thymer::Running { started_at: start };
        assert_eq!(thymer.elapsed_hours(start - Duration::seconds(5)), 0.0);
    }
}
