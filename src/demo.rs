//! Demo registrations.
//!
//! A fixed course catalog and a seeded generator that fills a registration
//! table with random per-student selections, for trying the scheduler
//! without real enrolment data.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::{DemoConfig, SchedulerConfig};
use crate::models::RegistrationTable;

/// Default course catalog.
pub const COURSE_CATALOG: [&str; 21] = [
    "Math",
    "Science",
    "History",
    "English",
    "Art",
    "Music",
    "Geography",
    "Biology",
    "Chemistry",
    "Physics",
    "Economics",
    "Philosophy",
    "Sociology",
    "Psychology",
    "Physical Education",
    "Literature",
    "Computer Science",
    "Business Studies",
    "Dance",
    "Soccer",
    "Driving",
];

/// Generates random registrations from `catalog`.
///
/// Each student (`"Student 1"`, `"Student 2"`, …) draws between
/// `min_courses` and `max_courses` distinct courses, capped at the catalog
/// size.
pub fn random_registrations<R: Rng>(
    catalog: &[String],
    config: &DemoConfig,
    rng: &mut R,
) -> RegistrationTable {
    let lo = config.min_courses.min(config.max_courses).min(catalog.len());
    let hi = config.max_courses.max(config.min_courses).min(catalog.len());

    let mut table = RegistrationTable::new();
    for student in 1..=config.students {
        let k = rng.random_range(lo..=hi);
        let picks = catalog.choose_multiple(rng, k).cloned();
        table.add_student(format!("Student {student}"), picks);
    }
    table
}

/// Generates registrations per `config`, seeded if `config.demo.seed` is set.
pub fn generate(config: &SchedulerConfig) -> RegistrationTable {
    let mut rng = match config.demo.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let table = random_registrations(&config.catalog.courses, &config.demo, &mut rng);
    debug!(
        students = table.student_count(),
        seed = ?config.demo.seed,
        "generated demo registrations"
    );
    table
}
