//! Exam scheduling CLI.
//!
//! # Usage
//!
//! ```bash
//! # Generate demo registrations
//! exam-schedule demo --out registrations.json --students 10 --seed 42
//!
//! # Assign days and export the timetable
//! exam-schedule schedule --registrations registrations.json --out schedule.csv
//!
//! # Check a hand-edited timetable
//! exam-schedule validate --registrations registrations.json --schedule schedule.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log filter (default: info)

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use exam_schedule::coloring::{ScheduleStats, WelshPowellColorer};
use exam_schedule::config::{ExportLayout, SchedulerConfig};
use exam_schedule::graph::{ConflictGraph, GraphView};
use exam_schedule::validation::validate_entries;
use exam_schedule::{demo, io};

#[derive(Parser)]
#[command(name = "exam-schedule")]
#[command(about = "Assign exams to days so no student sits two exams on one day", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Layout {
    Flat,
    ByDay,
}

impl From<Layout> for ExportLayout {
    fn from(layout: Layout) -> Self {
        match layout {
            Layout::Flat => ExportLayout::Flat,
            Layout::ByDay => ExportLayout::ByDay,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Build the conflict graph and assign days
    Schedule {
        /// Registrations (.json or .csv)
        #[arg(long)]
        registrations: PathBuf,
        /// Write the timetable to this CSV file
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long, value_enum)]
        layout: Option<Layout>,
        /// Write the graph view as JSON
        #[arg(long)]
        graph: Option<PathBuf>,
    },
    /// Check an edited timetable against the registrations
    Validate {
        /// Registrations (.json or .csv)
        #[arg(long)]
        registrations: PathBuf,
        /// Edited timetable CSV
        #[arg(long)]
        schedule: PathBuf,
        #[arg(long, value_enum)]
        layout: Option<Layout>,
    },
    /// Generate random registrations from the course catalog
    Demo {
        /// Output file (.json or .csv)
        #[arg(long)]
        out: PathBuf,
        #[arg(long)]
        students: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => SchedulerConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => SchedulerConfig::default(),
    };

    match cli.command {
        Commands::Schedule {
            registrations,
            out,
            layout,
            graph,
        } => {
            let table = io::load_registrations(&registrations)
                .with_context(|| format!("failed to read {}", registrations.display()))?;
            for issue in table.issues() {
                warn!("skipping: {issue}");
            }

            let plan = WelshPowellColorer::new().plan(&table);
            let stats = ScheduleStats::calculate(&plan.graph, &plan.coloring.assignment);
            info!(
                courses = stats.course_count,
                conflicts = stats.conflict_count,
                days = stats.day_count,
                "schedule ready"
            );

            println!("Minimum number of days found: {}", plan.coloring.day_count);
            for (day, courses) in plan.coloring.days.iter().enumerate() {
                let names: Vec<&str> = courses.iter().map(|c| c.as_str()).collect();
                println!("{}: {}", config.labels.label(day), names.join(", "));
            }

            if let Some(path) = out {
                let layout = layout.map_or(config.export.layout, ExportLayout::from);
                io::save_schedule(&path, &plan.coloring.assignment, layout, &config.labels)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!("Schedule exported as {}", path.display());
            }

            if let Some(path) = graph {
                let view = GraphView::new(&plan.graph).with_days(&plan.coloring.assignment);
                io::save_graph(&path, &view)
                    .with_context(|| format!("failed to write {}", path.display()))?;
            }
        }
        Commands::Validate {
            registrations,
            schedule,
            layout,
        } => {
            let table = io::load_registrations(&registrations)
                .with_context(|| format!("failed to read {}", registrations.display()))?;
            for issue in table.issues() {
                warn!("skipping: {issue}");
            }
            let graph = ConflictGraph::build(&table);

            let layout = layout.map_or(config.export.layout, ExportLayout::from);
            let edited = io::load_schedule(&schedule, layout, &config.labels)
                .with_context(|| format!("failed to read {}", schedule.display()))?;

            let report = validate_entries(&graph, &edited);
            for course in &report.unknown_courses {
                warn!("course '{course}' is not in the registrations");
            }
            if !report.is_valid() {
                for message in report.messages() {
                    eprintln!("{message}");
                }
                return Ok(ExitCode::FAILURE);
            }
            println!("Schedule is valid!");
        }
        Commands::Demo {
            out,
            students,
            seed,
        } => {
            if let Some(students) = students {
                config.demo.students = students;
            }
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            let table = demo::generate(&config);
            io::save_registrations(&out, &table)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!(
                "Wrote {} student registrations to {}",
                table.student_count(),
                out.display()
            );
        }
    }

    Ok(ExitCode::SUCCESS)
}
