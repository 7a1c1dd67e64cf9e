//! Extraction of typed schedules from the HTML-rendered timetable pages.
//!
//! `groups`, `lessons`, `days` and `helpers::decode_schedule` form the pure
//! decoding pipeline; `schedule_getter` and `run_tool` wrap it with transport
//! and a CLI.
pub mod days;
pub mod groups;
pub mod helpers;
pub mod lessons;
pub mod models;
pub mod patterns;
pub mod run_tool;
pub mod schedule_getter;
