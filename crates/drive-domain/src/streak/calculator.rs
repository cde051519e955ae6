use std::collections::{BTreeSet, HashSet};

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::completion::CompletionRecord;

/// Aggregate streak figures for one habit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakStats {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_completed_days: u32,
    pub last_completed_date: Option<NaiveDate>,
}

/// Days on which at least one record says `completed`.
fn completed_days(completions: &[CompletionRecord]) -> HashSet<NaiveDate> {
    completions
        .iter()
        .filter(|c| c.completed())
        .map(|c| c.date())
        .collect()
}

/// Consecutive completed days ending today, or ending yesterday while today
/// is still open. Stops at the first missing day.
pub fn compute_streak(completions: &[CompletionRecord], today: NaiveDate) -> u32 {
    current_streak(&completed_days(completions), today)
}

fn current_streak(days: &HashSet<NaiveDate>, today: NaiveDate) -> u32 {
    let seed = if days.contains(&today) {
        today
    } else {
        match today.checked_sub_days(Days::new(1)) {
            Some(yesterday) if days.contains(&yesterday) => yesterday,
            _ => return 0,
        }
    };

    let mut streak = 1u32;
    let mut cursor = seed;
    while let Some(prev) = cursor.checked_sub_days(Days::new(1)) {
        if !days.contains(&prev) {
            break;
        }
        streak += 1;
        cursor = prev;
    }

    streak
}

/// Current streak plus history-wide figures.
pub fn compute_streak_stats(completions: &[CompletionRecord], today: NaiveDate) -> StreakStats {
    let days = completed_days(completions);
    if days.is_empty() {
        return StreakStats::default();
    }

    let ordered: BTreeSet<NaiveDate> = days.iter().copied().collect();

    let mut longest = 0u32;
    let mut run = 0u32;
    let mut prev: Option<NaiveDate> = None;
    for &day in &ordered {
        run = match prev {
            Some(p) if p.succ_opt() == Some(day) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(day);
    }

    StreakStats {
        current_streak: current_streak(&days, today),
        longest_streak: longest,
        total_completed_days: ordered.len() as u32,
        last_completed_date: ordered.last().copied(),
    }
}
