use serde::{Deserialize, Serialize};

use super::SleepEntry;

/// Coarse rating of average nightly sleep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SleepQuality {
    Great,
    Good,
    Fair,
    Poor,
}

impl SleepQuality {
    pub fn from_hours(hours: f64) -> Self {
        if hours >= 8.0 {
            Self::Great
        } else if hours >= 7.0 {
            Self::Good
        } else if hours >= 6.0 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Great => "Great",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }
}

impl std::fmt::Display for SleepQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepSummary {
    pub entry_count: usize,
    pub average_hours: f64,
    /// Duration of the entry with the latest start.
    pub last_hours: Option<f64>,
    pub quality: SleepQuality,
}

impl SleepSummary {
    pub fn from_entries(entries: &[SleepEntry]) -> Self {
        let entry_count = entries.len();
        let average_hours = if entry_count == 0 {
            0.0
        } else {
            entries.iter().map(SleepEntry::duration_hours).sum::<f64>() / entry_count as f64
        };
        let last_hours = entries
            .iter()
            .max_by_key(|e| e.span().start())
            .map(SleepEntry::duration_hours);

        Self {
            entry_count,
            average_hours,
            last_hours,
            quality: SleepQuality::from_hours(average_hours),
        }
    }
}
