use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::completion::CompletionRecord;
use crate::shared::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    pub date: NaiveDate,
    pub completed: bool,
}

/// Calendar heat grid of the most recent completion records, filled
/// top-to-bottom then left-to-right.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatGrid {
    rows: usize,
    columns: usize,
    cells: Vec<Vec<Option<GridCell>>>,
}

impl HeatGrid {
    pub const DEFAULT_ROWS: usize = 6;
    pub const DEFAULT_COLUMNS: usize = 40;
    pub const MAX_CELLS: usize = 7 * 366;

    pub fn build(
        completions: &[CompletionRecord],
        rows: usize,
        columns: usize,
    ) -> Result<Self, DomainError> {
        if rows == 0 || columns == 0 {
            return Err(DomainError::Validation(
                "Grid must have at least one row and one column".to_string(),
            ));
        }
        if rows.saturating_mul(columns) > Self::MAX_CELLS {
            return Err(DomainError::Validation(format!(
                "Grid cannot exceed {} cells",
                Self::MAX_CELLS
            )));
        }

        Ok(Self::fill(completions, rows, columns))
    }

    pub fn with_default_shape(completions: &[CompletionRecord]) -> Self {
        Self::fill(completions, Self::DEFAULT_ROWS, Self::DEFAULT_COLUMNS)
    }

    fn fill(completions: &[CompletionRecord], rows: usize, columns: usize) -> Self {
        let mut ordered: Vec<&CompletionRecord> = completions.iter().collect();
        ordered.sort_by_key(|c| c.date());

        let capacity = rows * columns;
        let recent = &ordered[ordered.len().saturating_sub(capacity)..];

        let mut cells = vec![vec![None; columns]; rows];
        for (i, record) in recent.iter().enumerate() {
            cells[i % rows][i / rows] = Some(GridCell {
                date: record.date(),
                completed: record.completed(),
            });
        }

        Self {
            rows,
            columns,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&GridCell> {
        self.cells.get(row)?.get(column)?.as_ref()
    }

    pub fn cells(&self) -> &[Vec<Option<GridCell>>] {
        &self.cells
    }

    pub fn filled(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }
}
