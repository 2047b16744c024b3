//! Day-keyed schedule table.
//!
//! The table presentation of a schedule: one column per day, each column
//! listing the courses held that day, shorter columns padded with empty
//! cells. This is the layout people edit by hand, and the one in which a
//! course can end up under two days at once.

use serde::{Deserialize, Serialize};

use super::{Course, DayAssignment, DayLabels, EditedSchedule};

/// One column of a [`DayTable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayColumn {
    /// Column header (normally a day label).
    pub header: String,
    /// Cell values, top to bottom. May contain blanks.
    pub cells: Vec<String>,
}

/// A schedule laid out as day columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTable {
    /// Columns in display order.
    pub columns: Vec<DayColumn>,
}

impl DayTable {
    /// Builds a table from courses grouped by day (`groups[d]` = day `d`).
    pub fn from_groups(groups: &[Vec<Course>], labels: &DayLabels) -> Self {
        let columns = groups
            .iter()
            .enumerate()
            .map(|(day, courses)| DayColumn {
                header: labels.label(day),
                cells: courses.iter().map(|c| c.as_str().to_string()).collect(),
            })
            .collect();
        Self { columns }
    }

    /// Builds a table from an assignment; courses within a day are sorted by name.
    ///
    /// Only occupied days get a column.
    pub fn from_assignment(assignment: &DayAssignment, labels: &DayLabels) -> Self {
        let columns = assignment
            .by_day()
            .into_iter()
            .map(|(day, courses)| DayColumn {
                header: labels.label(day),
                cells: courses.iter().map(|c| c.as_str().to_string()).collect(),
            })
            .collect();
        Self { columns }
    }

    /// Builds a table from a header row and data rows.
    ///
    /// Missing trailing cells are treated as blank. Cells past the last
    /// header land in columns with an empty header, which no day label
    /// matches.
    pub fn from_rows(mut headers: Vec<String>, rows: &[Vec<String>]) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        if width > headers.len() {
            headers.resize(width, String::new());
        }
        let columns = headers
            .into_iter()
            .enumerate()
            .map(|(i, header)| DayColumn {
                header,
                cells: rows
                    .iter()
                    .map(|row| row.get(i).cloned().unwrap_or_default())
                    .collect(),
            })
            .collect();
        Self { columns }
    }

    /// Column headers.
    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.header.as_str()).collect()
    }

    /// Height of the tallest column.
    pub fn height(&self) -> usize {
        self.columns.iter().map(|c| c.cells.len()).max().unwrap_or(0)
    }

    /// Row-major view, padded with empty cells.
    pub fn rows(&self) -> Vec<Vec<&str>> {
        (0..self.height())
            .map(|r| {
                self.columns
                    .iter()
                    .map(|c| c.cells.get(r).map_or("", String::as_str))
                    .collect()
            })
            .collect()
    }

    /// Reads the table back as edited entries.
    ///
    /// Every non-blank cell becomes one entry for its column's day. A column
    /// whose header is not a day label turns each of its courses into a
    /// malformed entry.
    pub fn to_edited(&self, labels: &DayLabels) -> EditedSchedule {
        let mut edited = EditedSchedule::new();
        for column in &self.columns {
            for cell in &column.cells {
                edited.push_raw(cell, &column.header, labels);
            }
        }
        edited
    }
}
