//! # Progress
//!
//! Pure presentation math over quiz position and score. Nothing here touches
//! session state; the TUI calls these to decide what to show.
//!
//! Percentages round half up, so 2 of 8 is 25% and 1 of 8 is 13%.

/// Round `100 * part / whole` to the nearest integer, halves rounding up.
///
/// `whole` must be non-zero; a `QuestionSet` guarantees that.
fn rounded_percent(part: usize, whole: usize) -> u32 {
    debug_assert!(whole > 0, "percent of an empty whole");
    let whole = whole.max(1) as u64;
    ((200 * part as u64 + whole) / (2 * whole)) as u32
}

/// Completion while a question is on screen: counts the current question as
/// reached, so the first of four questions reads 25%.
pub fn completion_percent(index: usize, total: usize) -> u32 {
    rounded_percent(index + 1, total)
}

/// Final score as a percentage of the question count.
pub fn final_percent(score: usize, total: usize) -> u32 {
    rounded_percent(score, total)
}

/// Coarse progress step drawn by the gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressBucket {
    Quarter,
    Half,
    ThreeQuarter,
    Full,
}

impl ProgressBucket {
    pub fn from_percent(percent: u32) -> Self {
        match percent {
            0..=25 => ProgressBucket::Quarter,
            26..=50 => ProgressBucket::Half,
            51..=75 => ProgressBucket::ThreeQuarter,
            _ => ProgressBucket::Full,
        }
    }

    pub fn for_question(index: usize, total: usize) -> Self {
        Self::from_percent(completion_percent(index, total))
    }

    pub fn label(self) -> &'static str {
        match self {
            ProgressBucket::Quarter => "25%",
            ProgressBucket::Half => "50%",
            ProgressBucket::ThreeQuarter => "75%",
            ProgressBucket::Full => "100%",
        }
    }

    /// Fill ratio for a gauge widget.
    pub fn ratio(self) -> f64 {
        match self {
            ProgressBucket::Quarter => 0.25,
            ProgressBucket::Half => 0.5,
            ProgressBucket::ThreeQuarter => 0.75,
            ProgressBucket::Full => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_questions_step_through_every_bucket() {
        let buckets: Vec<_> = (0..4).map(|i| ProgressBucket::for_question(i, 4)).collect();
        assert_eq!(
            buckets,
            vec![
                ProgressBucket::Quarter,
                ProgressBucket::Half,
                ProgressBucket::ThreeQuarter,
                ProgressBucket::Full,
            ]
        );
    }

    #[test]
    fn test_bucket_boundaries_are_inclusive() {
        assert_eq!(ProgressBucket::from_percent(25), ProgressBucket::Quarter);
        assert_eq!(ProgressBucket::from_percent(26), ProgressBucket::Half);
        assert_eq!(ProgressBucket::from_percent(50), ProgressBucket::Half);
        assert_eq!(ProgressBucket::from_percent(75), ProgressBucket::ThreeQuarter);
        assert_eq!(ProgressBucket::from_percent(76), ProgressBucket::Full);
    }

    #[test]
    fn test_three_questions_skip_quarter() {
        // 33%, 67%, 100%
        assert_eq!(ProgressBucket::for_question(0, 3), ProgressBucket::Half);
        assert_eq!(ProgressBucket::for_question(1, 3), ProgressBucket::ThreeQuarter);
        assert_eq!(ProgressBucket::for_question(2, 3), ProgressBucket::Full);
    }

    #[test]
    fn test_single_question_is_full_immediately() {
        assert_eq!(completion_percent(0, 1), 100);
        assert_eq!(ProgressBucket::for_question(0, 1), ProgressBucket::Full);
    }

    #[test]
    fn test_final_percent_rounds_half_up() {
        assert_eq!(final_percent(4, 4), 100);
        assert_eq!(final_percent(2, 4), 50);
        assert_eq!(final_percent(0, 4), 0);
        assert_eq!(final_percent(1, 3), 33);
        assert_eq!(final_percent(2, 3), 67);
        assert_eq!(final_percent(1, 8), 13);
        assert_eq!(final_percent(1, 200), 1);
    }

    #[test]
    fn test_final_percent_is_not_clamped() {
        // Cumulative scoring can over-count after going back.
        assert_eq!(final_percent(5, 4), 125);
    }

    #[test]
    fn test_labels_and_ratios() {
        assert_eq!(ProgressBucket::Quarter.label(), "25%");
        assert_eq!(ProgressBucket::Full.label(), "100%");
        assert_eq!(ProgressBucket::ThreeQuarter.ratio(), 0.75);
    }
}
