#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::completion::CompletionRecord;
    use crate::shared::HabitId;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        day(2025, 4, 10)
    }

    fn done(habit: &HabitId, date: NaiveDate) -> CompletionRecord {
        CompletionRecord::new(habit.clone(), date, true)
    }

    fn missed(habit: &HabitId, date: NaiveDate) -> CompletionRecord {
        CompletionRecord::new(habit.clone(), date, false)
    }

    fn days_back(n: u64) -> NaiveDate {
        today() - chrono::Days::new(n)
    }

    #[test]
    fn test_empty_history_has_no_streak() {
        assert_eq!(compute_streak(&[], today()), 0);
    }

    #[test]
    fn test_completed_today_counts_one() {
        let habit = HabitId::new();
        assert_eq!(compute_streak(&[done(&habit, today())], today()), 1);
    }

    #[test]
    fn test_yesterday_keeps_streak_alive() {
        let habit = HabitId::new();
        assert_eq!(compute_streak(&[done(&habit, days_back(1))], today()), 1);
    }

    #[test]
    fn test_two_days_ago_is_broken() {
        let habit = HabitId::new();
        assert_eq!(compute_streak(&[done(&habit, days_back(2))], today()), 0);
    }

    #[test]
    fn test_consecutive_days_ending_today() {
        let habit = HabitId::new();
        let records: Vec<_> = (0..5).map(|n| done(&habit, days_back(n))).collect();
        assert_eq!(compute_streak(&records, today()), 5);
    }

    #[test]
    fn test_consecutive_days_ending_yesterday() {
        let habit = HabitId::new();
        let records: Vec<_> = (1..=4).map(|n| done(&habit, days_back(n))).collect();
        assert_eq!(compute_streak(&records, today()), 4);
    }

    #[test]
    fn test_gap_truncates_streak() {
        let habit = HabitId::new();
        // today, -1, -2 done; -3 missing; -4, -5 done
        let records = vec![
            done(&habit, days_back(5)),
            done(&habit, days_back(4)),
            done(&habit, days_back(2)),
            done(&habit, days_back(1)),
            done(&habit, today()),
        ];
        assert_eq!(compute_streak(&records, today()), 3);
    }

    #[test]
    fn test_incomplete_record_acts_as_gap() {
        let habit = HabitId::new();
        let records = vec![
            done(&habit, days_back(3)),
            missed(&habit, days_back(2)),
            done(&habit, days_back(1)),
            done(&habit, today()),
        ];
        assert_eq!(compute_streak(&records, today()), 2);
    }

    #[test]
    fn test_incomplete_today_uses_yesterday() {
        let habit = HabitId::new();
        let records = vec![
            done(&habit, days_back(2)),
            done(&habit, days_back(1)),
            missed(&habit, today()),
        ];
        assert_eq!(compute_streak(&records, today()), 2);
    }

    #[test]
    fn test_duplicate_day_with_any_completed_counts() {
        let habit = HabitId::new();
        let records = vec![
            missed(&habit, today()),
            done(&habit, today()),
            done(&habit, today()),
            done(&habit, days_back(1)),
        ];
        assert_eq!(compute_streak(&records, today()), 2);
    }

    #[test]
    fn test_unordered_input() {
        let habit = HabitId::new();
        let records = vec![
            done(&habit, days_back(1)),
            done(&habit, days_back(3)),
            done(&habit, today()),
            done(&habit, days_back(2)),
        ];
        assert_eq!(compute_streak(&records, today()), 4);
    }

    #[test]
    fn test_future_records_are_ignored() {
        let habit = HabitId::new();
        let records = vec![done(&habit, today() + chrono::Days::new(1))];
        assert_eq!(compute_streak(&records, today()), 0);
    }

    #[test]
    fn test_streak_across_month_and_year_boundary() {
        let habit = HabitId::new();
        let records = vec![
            done(&habit, day(2024, 12, 30)),
            done(&habit, day(2024, 12, 31)),
            done(&habit, day(2025, 1, 1)),
        ];
        assert_eq!(compute_streak(&records, day(2025, 1, 1)), 3);
    }

    #[test]
    fn test_idempotent() {
        let habit = HabitId::new();
        let records: Vec<_> = (0..3).map(|n| done(&habit, days_back(n))).collect();
        assert_eq!(
            compute_streak(&records, today()),
            compute_streak(&records, today())
        );
    }

    #[test]
    fn test_stats_for_empty_history() {
        assert_eq!(compute_streak_stats(&[], today()), StreakStats::default());
    }

    #[test]
    fn test_stats_longest_and_total() {
        let habit = HabitId::new();
        let records = vec![
            // run of 4 in the past
            done(&habit, days_back(20)),
            done(&habit, days_back(19)),
            done(&habit, days_back(18)),
            done(&habit, days_back(17)),
            missed(&habit, days_back(16)),
            // current run of 2
            done(&habit, days_back(1)),
            done(&habit, today()),
            // duplicate day does not inflate totals
            done(&habit, today()),
        ];

        let stats = compute_streak_stats(&records, today());

        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.longest_streak, 4);
        assert_eq!(stats.total_completed_days, 6);
        assert_eq!(stats.last_completed_date, Some(today()));
    }

    #[test]
    fn test_stats_broken_current_streak_keeps_history() {
        let habit = HabitId::new();
        let records = vec![done(&habit, days_back(10)), done(&habit, days_back(9))];

        let stats = compute_streak_stats(&records, today());

        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.longest_streak, 2);
        assert_eq!(stats.last_completed_date, Some(days_back(9)));
    }
}
