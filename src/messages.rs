use crate::feedback::Category;
use rand::{seq::SliceRandom, Rng};

const UNDER_POOL: &[&str] = &[
    "Only {hours} hours? The office plant worked longer than you.",
    "{hours} hours. Bold of you to call that a workday.",
    "Recommended: 8 hours per day. Required: your soul.",
    "We noticed {hours} hours. Management noticed too.",
    "Part-time is a lifestyle, not a timesheet entry.",
    "Leaving early again? The coffee machine will miss you.",
];

const EXACT_POOL: &[&str] = &[
    "Exactly 8 hours. Perfectly average. HR is thrilled.",
    "8 hours on the dot. Suspiciously precise.",
    "A textbook day. Nobody will remember it.",
    "Eight hours logged. Your manager yawns approvingly.",
];

const OVER_POOL: &[&str] = &[
    "Thank you for your dedication! 🌟",
    "{hours} hours! Your family has filed a missing person report.",
    "{hours} hours logged. Overtime is its own reward. Literally, it's unpaid.",
    "Sleep is for people who don't love synergy.",
    "{hours} hours? We'll put your name on a mug. Eventually.",
    "Congratulations, you've unlocked the 'burnout' achievement.",
];

const REMINDER_POOL: &[&str] = &[
    "Your manager is watching your timesheet. Fill it in.",
    "Friendly reminder: unlogged hours don't exist.",
    "Did you log your hours? Asking for a manager.",
    "Another 20 minutes have passed. Were they billable?",
    "Timesheets don't fill themselves. Yet.",
];

const TIP_THANKS_POOL: &[&str] = &[
    "Thanks for the ${tip} tip! Timesheet submitted.",
    "A ${tip} tip? Management will allow one extra bathroom break. Submitted!",
    "${tip} received. Your hours have been lovingly filed.",
];

const SKIP_POOL: &[&str] = &[
    "No tip? Bold. Timesheet submitted anyway.",
    "Submitted. We'll remember this at review time.",
    "Timesheet filed. The tip jar weeps quietly.",
];

pub fn pool(category: Category) -> &'static [&'static str] {
    match category {
        Category::Under => UNDER_POOL,
        Category::Exact => EXACT_POOL,
        Category::Over => OVER_POOL,
    }
}

/// Uniform choice from a fixed pool. Pools are non-empty literals.
pub fn pick<R: Rng + ?Sized>(pool: &'static [&'static str], rng: &mut R) -> &'static str {
    pool.choose(rng).copied().unwrap_or_default()
}

pub fn feedback_message<R: Rng + ?Sized>(category: Category, hours: f64, rng: &mut R) -> String {
    pick(pool(category), rng).replace("{hours}", &format_hours(hours))
}

pub fn reminder_message<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(REMINDER_POOL, rng).to_string()
}

pub fn acknowledgement_message<R: Rng + ?Sized>(tip: Option<f64>, rng: &mut R) -> String {
    match tip {
        Some(amount) => pick(TIP_THANKS_POOL, rng).replace("{tip}", &format_hours(amount)),
        None => pick(SKIP_POOL, rng).to_string(),
    }
}

/// Renders a number without a trailing `.0`: `10`, `10.5`, `7.25`.
pub fn format_hours(value: f64) -> String {
    format_decimal(value, 2)
}

/// Rounds to `places` decimals and trims trailing zeros.
pub fn format_decimal(value: f64, places: usize) -> String {
    let text = format!("{value:.places$}");
    if !text.contains('.') {
        return text;
    }
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn format_hours_trims_trailing_zeros() {
        assert_eq!(format_hours(10.0), "10");
        assert_eq!(format_hours(10.5), "10.5");
        assert_eq!(format_hours(7.25), "7.25");
        assert_eq!(format_hours(1.0 / 3.0), "0.33");
        assert_eq!(format_hours(0.0), "0");
        assert_eq!(format_decimal(7.375, 3), "7.375");
        assert_eq!(format_decimal(0.1 + 0.2, 4), "0.3");
        assert_eq!(format_decimal(12.0, 0), "12");
    }

    #[test]
    fn feedback_substitutes_hours_placeholder() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let message = feedback_message(Category::Over, 12.5, &mut rng);
            assert!(!message.contains("{hours}"));
            assert!(OVER_POOL
                .iter()
                .any(|line| line.replace("{hours}", "12.5") == message));
        }
    }

    #[test]
    fn every_pool_is_non_empty() {
        for category in [Category::Under, Category::Exact, Category::Over] {
            assert!(!pool(category).is_empty());
        }
        assert!(!REMINDER_POOL.is_empty());
        assert!(!TIP_THANKS_POOL.is_empty());
        assert!(!SKIP_POOL.is_empty());
    }

    #[test]
    fn acknowledgement_mentions_tip_amount() {
        let mut rng = StdRng::seed_from_u64(3);
        let message = acknowledgement_message(Some(5.0), &mut rng);
        assert!(message.contains("$5"));
        let skipped = acknowledgement_message(None, &mut rng);
        assert!(SKIP_POOL.contains(&skipped.as_str()));
    }
}
