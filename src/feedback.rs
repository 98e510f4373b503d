use crate::messages;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const TARGET_HOURS: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Under,
    Exact,
    Over,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub show: bool,
    pub category: Category,
    pub message: Option<String>,
}

impl Default for Notification {
    fn default() -> Self {
        Self {
            show: false,
            category: Category::Under,
            message: None,
        }
    }
}

/// Parses typed hours. Empty, malformed and non-finite text all mean "no value".
pub fn parse_hours(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

pub fn categorize(hours: f64) -> Category {
    if hours == TARGET_HOURS {
        Category::Exact
    } else if hours > TARGET_HOURS {
        Category::Over
    } else {
        Category::Under
    }
}

pub fn derive_notification<R: Rng + ?Sized>(hours: f64, rng: &mut R) -> Notification {
    let category = categorize(hours);
    Notification {
        show: true,
        category,
        message: Some(messages::feedback_message(category, hours, rng)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn categorizes_against_eight_hours() {
        assert_eq!(categorize(8.0), Category::Exact);
        assert_eq!(categorize(8.5), Category::Over);
        assert_eq!(categorize(7.99), Category::Under);
        assert_eq!(categorize(0.0), Category::Under);
        assert_eq!(categorize(24.0), Category::Over);
    }

    #[test]
    fn parse_rejects_blank_and_garbage() {
        assert_eq!(parse_hours(""), None);
        assert_eq!(parse_hours("   "), None);
        assert_eq!(parse_hours("lots"), None);
        assert_eq!(parse_hours("NaN"), None);
        assert_eq!(parse_hours("inf"), None);
        assert_eq!(parse_hours(" 7.5 "), Some(7.5));
    }

    #[test]
    fn derived_notification_is_shown_with_message() {
        let mut rng = StdRng::seed_from_u64(11);
        let notification = derive_notification(10.0, &mut rng);
        assert!(notification.show);
        assert_eq!(notification.category, Category::Over);
        assert!(notification.message.is_some_and(|m| !m.is_empty()));
    }
}
