//! Display Helpers
//!
//! Status badges, deadlines and countdowns derived from a record.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::model::CampaignRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampaignStatus {
    Ongoing,
    Ended,
}

impl CampaignStatus {
    pub fn of(campaign: &CampaignRecord) -> Self {
        if campaign.is_active {
            CampaignStatus::Ongoing
        } else {
            CampaignStatus::Ended
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CampaignStatus::Ongoing => "Ongoing",
            CampaignStatus::Ended => "Ended",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            CampaignStatus::Ongoing => "status-badge ongoing",
            CampaignStatus::Ended => "status-badge ended",
        }
    }
}

/// Deadline as a UTC date-time
pub fn format_deadline(deadline: u64) -> String {
    i64::try_from(deadline)
        .ok()
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
        .map(|dt| dt.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Remaining time until a deadline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeLeft {
    Remaining { days: u64, hours: u64, minutes: u64 },
    Ended,
}

impl TimeLeft {
    pub fn until(deadline: u64, now: u64) -> Self {
        if deadline <= now {
            return TimeLeft::Ended;
        }
        let secs = deadline - now;
        TimeLeft::Remaining {
            days: secs / 86_400,
            hours: secs % 86_400 / 3_600,
            minutes: secs % 3_600 / 60,
        }
    }
}

impl fmt::Display for TimeLeft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeLeft::Ended => f.write_str("Ended"),
            TimeLeft::Remaining { days: 0, hours: 0, minutes: 0 } => f.write_str("< 1m left"),
            TimeLeft::Remaining { days: 0, hours, minutes } => write!(f, "{}h {}m left", hours, minutes),
            TimeLeft::Remaining { days, hours, .. } => write!(f, "{}d {}h left", days, hours),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::campaign;

    #[test]
    fn test_status() {
        let mut c = campaign(0, "0xowner");
        assert_eq!(CampaignStatus::of(&c).label(), "Ongoing");
        c.is_active = false;
        assert_eq!(CampaignStatus::of(&c), CampaignStatus::Ended);
    }

    #[test]
    fn test_format_deadline() {
        assert_eq!(format_deadline(0), "1970-01-01 00:00 UTC");
        assert_eq!(format_deadline(1_735_689_600), "2025-01-01 00:00 UTC");
        assert_eq!(format_deadline(u64::MAX), "unknown");
    }

    #[test]
    fn test_time_left() {
        assert_eq!(TimeLeft::until(100, 100), TimeLeft::Ended);
        assert_eq!(TimeLeft::until(100, 200), TimeLeft::Ended);

        let left = TimeLeft::until(2 * 86_400 + 3 * 3_600 + 5 * 60 + 7, 0);
        assert_eq!(left, TimeLeft::Remaining { days: 2, hours: 3, minutes: 5 });
        assert_eq!(left.to_string(), "2d 3h left");

        assert_eq!(TimeLeft::until(3_700, 0).to_string(), "1h 1m left");
        assert_eq!(TimeLeft::until(30, 0).to_string(), "< 1m left");
    }
}
