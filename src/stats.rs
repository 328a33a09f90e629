use crate::models::{PlannerData, PlannerSummary, Streak};
use chrono::{Duration, NaiveDate};

/// Records that at least one task was completed today. Idempotent per
/// calendar day: a second completion on the same day leaves the streak
/// untouched. A completion the day after the last one extends the streak;
/// any gap resets it to 1.
pub fn record_completion_today(streak: &Streak, today: NaiveDate) -> Streak {
    let today_key = today.to_string();
    if streak.last_completed_date.as_deref() == Some(today_key.as_str()) {
        return streak.clone();
    }

    let yesterday_key = (today - Duration::days(1)).to_string();
    let count = if streak.last_completed_date.as_deref() == Some(yesterday_key.as_str()) {
        streak.count + 1
    } else {
        1
    };

    Streak {
        count,
        last_completed_date: Some(today_key),
    }
}

pub fn progress_percent(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as u32
}

pub fn build_summary(data: &PlannerData) -> PlannerSummary {
    let total = data.tasks.len();
    let completed = data.tasks.iter().filter(|task| task.completed).count();
    PlannerSummary {
        total,
        completed,
        percent: progress_percent(completed, total),
        streak: data.streak.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn first_completion_starts_a_streak() {
        let streak = record_completion_today(&Streak::default(), day(2026, 1, 5));
        assert_eq!(streak.count, 1);
        assert_eq!(streak.last_completed_date.as_deref(), Some("2026-01-05"));
    }

    #[test]
    fn same_day_is_idempotent() {
        let today = day(2026, 1, 5);
        let once = record_completion_today(&Streak::default(), today);
        let twice = record_completion_today(&once, today);
        assert_eq!(twice.count, once.count);
        assert_eq!(twice.last_completed_date, once.last_completed_date);
    }

    #[test]
    fn consecutive_days_extend_the_streak() {
        let mut streak = Streak::default();
        for (offset, expected) in [(0, 1), (1, 2), (2, 3)] {
            streak = record_completion_today(&streak, day(2026, 1, 5) + Duration::days(offset));
            assert_eq!(streak.count, expected);
        }
    }

    #[test]
    fn a_gap_resets_to_one() {
        let streak = record_completion_today(&Streak::default(), day(2026, 1, 5));
        let after_gap = record_completion_today(&streak, day(2026, 1, 7));
        assert_eq!(after_gap.count, 1);
        assert_eq!(after_gap.last_completed_date.as_deref(), Some("2026-01-07"));
    }

    #[test]
    fn streak_extends_across_a_month_boundary() {
        let streak = record_completion_today(&Streak::default(), day(2026, 1, 31));
        let next = record_completion_today(&streak, day(2026, 2, 1));
        assert_eq!(next.count, 2);
    }

    #[test]
    fn percent_is_zero_for_no_tasks() {
        assert_eq!(progress_percent(0, 0), 0);
    }

    #[test]
    fn percent_rounds_to_nearest_integer() {
        assert_eq!(progress_percent(1, 3), 33);
        assert_eq!(progress_percent(2, 3), 67);
        assert_eq!(progress_percent(3, 3), 100);
    }
}
