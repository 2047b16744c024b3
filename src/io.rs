//! File import and export.
//!
//! # Registrations
//! - JSON: `[{"student": "s1", "courses": ["Math", "Art"]}, ...]`
//! - CSV: `student,course` rows, one per registration
//!
//! # Schedules
//! - Flat CSV: `course,day,label` (day is the 0-based index)
//! - By-day CSV: one column per day label, courses beneath, blank padding
//!
//! Both schedule layouts can be read back as an [`EditedSchedule`] for
//! validation. Readers take any [`Read`]; the `load_*`/`save_*` helpers pick
//! the format from the file extension.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use tracing::info;

use crate::config::ExportLayout;
use crate::error::{Result, ScheduleError};
use crate::graph::GraphView;
use crate::models::{DayAssignment, DayLabels, DayTable, EditedSchedule, RegistrationTable};

#[derive(Debug, Serialize, Deserialize)]
struct RegistrationRow {
    student: String,
    course: String,
}

#[derive(Debug, Serialize)]
struct FlatRow<'a> {
    course: &'a str,
    day: usize,
    label: String,
}

enum Format {
    Json,
    Csv,
}

fn format_of(path: &Path) -> Result<Format> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("json") => Ok(Format::Json),
        Some("csv") => Ok(Format::Csv),
        _ => Err(ScheduleError::UnsupportedFormat(path.to_path_buf())),
    }
}

fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| ScheduleError::io(path, e))
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|e| ScheduleError::io(path, e))
}

// ---- registrations ----

/// Reads registrations from JSON.
pub fn read_registrations_json<R: Read>(reader: R) -> Result<RegistrationTable> {
    Ok(serde_json::from_reader(reader)?)
}

/// Reads registrations from `student,course` CSV rows.
pub fn read_registrations_csv<R: Read>(reader: R) -> Result<RegistrationTable> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut rows = Vec::new();
    for row in rdr.deserialize::<RegistrationRow>() {
        let row = row?;
        rows.push((row.student, row.course));
    }
    Ok(RegistrationTable::from_rows(rows))
}

/// Writes registrations as JSON.
pub fn write_registrations_json<W: Write>(table: &RegistrationTable, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, table)?;
    writer.flush().map_err(serde_json::Error::io)?;
    Ok(())
}

/// Writes registrations as `student,course` CSV rows.
pub fn write_registrations_csv<W: Write>(table: &RegistrationTable, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for reg in table.students() {
        for course in &reg.courses {
            wtr.serialize(RegistrationRow {
                student: reg.student.clone(),
                course: course.clone(),
            })?;
        }
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Loads registrations from a `.json` or `.csv` file.
pub fn load_registrations(path: impl AsRef<Path>) -> Result<RegistrationTable> {
    let path = path.as_ref();
    let table = match format_of(path)? {
        Format::Json => read_registrations_json(open(path)?)?,
        Format::Csv => read_registrations_csv(open(path)?)?,
    };
    info!(
        path = %path.display(),
        students = table.student_count(),
        "loaded registrations"
    );
    Ok(table)
}

/// Saves registrations to a `.json` or `.csv` file.
pub fn save_registrations(path: impl AsRef<Path>, table: &RegistrationTable) -> Result<()> {
    let path = path.as_ref();
    match format_of(path)? {
        Format::Json => write_registrations_json(table, create(path)?),
        Format::Csv => write_registrations_csv(table, create(path)?),
    }
}

// ---- schedules ----

/// Writes one `course,day,label` row per course, ordered by day.
pub fn write_flat<W: Write>(
    assignment: &DayAssignment,
    labels: &DayLabels,
    writer: W,
) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for entry in assignment.entries() {
        wtr.serialize(FlatRow {
            course: entry.course.as_str(),
            day: entry.day,
            label: labels.label(entry.day),
        })?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Writes a day-column table.
pub fn write_by_day<W: Write>(table: &DayTable, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    if !table.columns.is_empty() {
        wtr.write_record(table.headers())?;
        for row in table.rows() {
            wtr.write_record(row)?;
        }
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Reads a flat schedule.
///
/// Requires a `course` column and either a `day` (index or label) or a
/// `label` column; header names are matched case-insensitively.
pub fn read_flat<R: Read>(reader: R, labels: &DayLabels) -> Result<EditedSchedule> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = rdr.headers()?.clone();
    let mut edited = EditedSchedule::new();
    if headers.is_empty() {
        return Ok(edited);
    }

    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
    };
    let course_col =
        column("course").ok_or_else(|| ScheduleError::MissingColumn("course".into()))?;
    let day_col = column("day")
        .or_else(|| column("label"))
        .ok_or_else(|| ScheduleError::MissingColumn("day".into()))?;

    for record in rdr.records() {
        let record = record?;
        let course = record.get(course_col).unwrap_or("");
        let day = record.get(day_col).unwrap_or("");
        edited.push_raw(course, day, labels);
    }
    Ok(edited)
}

/// Reads a day-column table.
pub fn read_by_day<R: Read>(reader: R, labels: &DayLabels) -> Result<EditedSchedule> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers: Vec<String> = rdr.headers()?.iter().map(String::from).collect();
    let mut rows = Vec::new();
    for record in rdr.records() {
        rows.push(record?.iter().map(String::from).collect::<Vec<_>>());
    }
    Ok(DayTable::from_rows(headers, &rows).to_edited(labels))
}

/// Saves an assignment as CSV in the given layout.
pub fn save_schedule(
    path: impl AsRef<Path>,
    assignment: &DayAssignment,
    layout: ExportLayout,
    labels: &DayLabels,
) -> Result<()> {
    let path = path.as_ref();
    let writer = create(path)?;
    match layout {
        ExportLayout::Flat => write_flat(assignment, labels, writer)?,
        ExportLayout::ByDay => write_by_day(&DayTable::from_assignment(assignment, labels), writer)?,
    }
    info!(
        path = %path.display(),
        courses = assignment.len(),
        ?layout,
        "saved schedule"
    );
    Ok(())
}

/// Loads an edited schedule CSV in the given layout.
pub fn load_schedule(
    path: impl AsRef<Path>,
    layout: ExportLayout,
    labels: &DayLabels,
) -> Result<EditedSchedule> {
    let path = path.as_ref();
    let reader = open(path)?;
    match layout {
        ExportLayout::Flat => read_flat(reader, labels),
        ExportLayout::ByDay => read_by_day(reader, labels),
    }
}

/// Saves a graph view as pretty JSON.
pub fn save_graph(path: impl AsRef<Path>, view: &GraphView) -> Result<()> {
    let mut writer = create(path.as_ref())?;
    serde_json::to_writer_pretty(&mut writer, view)?;
    writer.flush().map_err(serde_json::Error::io)?;
    Ok(())
}
