use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Deserialize;

use schedule_model::Faculty;

pub mod schedule_model;

/// A model for describing ARGS of the tool.
/// Consists of:
/// 1. Path to config.json, that contains the timetable address and the list of faculties.
/// 2. Optional path to a JSON file where the result is stored. If the file already exists, the tool logs what changed since the last launch.
/// 3. What to fetch.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, value_name = "FILE", default_value = "config.json")]
    pub config_json_path: PathBuf,
    #[arg(long, value_name = "FILE")]
    pub output_json_path: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print faculties listed in config.json
    Faculties,
    /// Fetch groups of one faculty, or of every configured faculty if none is given
    Groups {
        #[arg(long)]
        faculty: Option<String>,
        #[arg(long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,
    },
    /// Fetch schedule of a group
    Schedule {
        #[arg(long)]
        group: String,
        #[arg(long, value_parser = parse_date_arg)]
        start: NaiveDate,
        #[arg(long, value_parser = parse_date_arg)]
        end: Option<NaiveDate>,
        #[arg(long)]
        faculty: Option<String>,
    },
    /// Fetch schedule of a room
    Room {
        #[arg(long)]
        room: String,
        #[arg(long, value_parser = parse_date_arg)]
        start: NaiveDate,
        #[arg(long, value_parser = parse_date_arg)]
        end: Option<NaiveDate>,
    },
    /// Fetch schedule of a teacher
    Teacher {
        #[arg(long)]
        teacher: String,
        #[arg(long, value_parser = parse_date_arg)]
        start: NaiveDate,
        #[arg(long, value_parser = parse_date_arg)]
        end: Option<NaiveDate>,
    },
}

/// Accepts both `01.09.2025` and `2025-09-01`.
pub fn parse_date_arg(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%d.%m.%Y")
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"))
        .map_err(|err| format!("expected DD.MM.YYYY or YYYY-MM-DD: {}", err))
}

fn default_timeout_secs() -> u64 {
    30
}

/// A model for describing configuration of the tool.
/// Consists of:
/// 1. Timetable site address, e.g. `https://example.edu`
/// 2. Paths of the group listing and of the schedule pages by group, room and teacher
/// 3. Timeout for a single request in seconds
/// 4. Faculties offered for group lookup
#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub groups_path: String,
    pub group_schedule_path: String,
    pub room_schedule_path: String,
    pub teacher_schedule_path: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub faculties: Vec<Faculty>,
}
