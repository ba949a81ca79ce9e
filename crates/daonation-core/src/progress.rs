//! Funding Progress
//!
//! Pure derivation of the progress bar and its label.

use crate::model::Wei;

/// How far a campaign is towards its target
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Progress {
    /// Funded share of the target in percent, may exceed 100
    Percent(f64),
    /// Zero target with funds raised
    Unbounded,
}

impl Progress {
    pub fn of(target: Wei, funded: Wei) -> Self {
        if target.0 > 0 {
            Progress::Percent(funded.0 as f64 * 100.0 / target.0 as f64)
        } else if funded.0 > 0 {
            Progress::Unbounded
        } else {
            Progress::Percent(0.0)
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, Progress::Unbounded)
    }

    /// Visual bar width in percent, clamped to [0, 100]
    pub fn bar_width(&self) -> f64 {
        match self {
            Progress::Percent(p) => p.clamp(0.0, 100.0),
            Progress::Unbounded => 100.0,
        }
    }

    /// Numeric label; over-funded campaigns show more than 100%
    pub fn label(&self) -> String {
        match self {
            Progress::Percent(p) => format!("{:.2}%", p),
            Progress::Unbounded => "∞".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_derivation() {
        assert_eq!(Progress::of(Wei(10), Wei(3)), Progress::Percent(30.0));
        assert_eq!(Progress::of(Wei(0), Wei(0)), Progress::Percent(0.0));
        assert_eq!(Progress::of(Wei(0), Wei(5)), Progress::Unbounded);
    }

    #[test]
    fn test_over_funded_label_exceeds_bar() {
        let p = Progress::of(Wei(4), Wei(6));
        assert_eq!(p.label(), "150.00%");
        assert_eq!(p.bar_width(), 100.0);
    }

    #[test]
    fn test_unbounded_display() {
        let p = Progress::of(Wei(0), Wei(1));
        assert!(p.is_unbounded());
        assert_eq!(p.label(), "∞");
        assert_eq!(p.bar_width(), 100.0);
    }

    #[test]
    fn test_label_two_decimals() {
        assert_eq!(Progress::of(Wei(3), Wei(1)).label(), "33.33%");
        assert_eq!(Progress::of(Wei(0), Wei(0)).label(), "0.00%");
    }
}
