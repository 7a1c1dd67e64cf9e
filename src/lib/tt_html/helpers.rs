use std::{error::Error, fs, path::Path};

use chrono::{Days, NaiveDate, Utc};
use log::{debug, info, warn};
use similar::TextDiff;

use super::{
    days::decode_schedule_days,
    models::schedule_model::{Group, Lesson, Schedule, ScheduleDay},
    patterns::{find_first, PAGE_GROUP_NAME},
};

const DEFAULT_WINDOW_DAYS: u64 = 7;

/// Assembles the schedule of one group out of its page.
/// `end_date` defaults to a week after `start_date` and is never before it.
/// Days outside of the window are left out.
pub fn decode_schedule(
    response_body: &str,
    group_id: &str,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
) -> Schedule {
    let end_date = schedule_end_date(start_date, end_date);
    let days = decode_schedule_days(response_body)
        .into_iter()
        .filter(|day| {
            let inside = start_date <= day.date && day.date <= end_date;
            if !inside {
                debug!("Dropping {} outside of {}..={}", day.date, start_date, end_date);
            }
            inside
        })
        .collect::<Vec<_>>();

    Schedule {
        group_id: group_id.to_owned(),
        group_name: decode_group_name(response_body, group_id),
        faculty_id: None,
        start_date,
        end_date,
        days,
        fetched_at: Utc::now(),
    }
}

pub fn schedule_end_date(start_date: NaiveDate, end_date: Option<NaiveDate>) -> NaiveDate {
    match end_date {
        Some(end_date) if end_date < start_date => {
            warn!(
                "End date {} is before start date {}, using the start date",
                end_date, start_date
            );
            start_date
        }
        Some(end_date) => end_date,
        None => start_date
            .checked_add_days(Days::new(DEFAULT_WINDOW_DAYS))
            .unwrap_or(NaiveDate::MAX),
    }
}

/* best effort, the name is only shown to people */
fn decode_group_name(response_body: &str, group_id: &str) -> String {
    find_first(&PAGE_GROUP_NAME, response_body, 1)
        .map(|name| name.to_owned())
        .unwrap_or_else(|| format!("Группа {}", group_id))
}

pub fn sort_groups(groups: &mut [Group]) {
    groups.sort_by(|fst, snd| fst.name.cmp(&snd.name));
}

pub fn sort_lessons(lessons: &mut [Lesson]) {
    lessons.sort_by_key(|lesson| lesson.pair_number);
}

pub fn sort_days(days: &mut [ScheduleDay]) {
    days.sort_by_key(|day| day.date);
}

pub fn read_previous_output(path: &Path) -> Result<Option<String>, Box<dyn Error>> {
    if path.exists() {
        info!(
            "Reading previous output from {}",
            std::path::absolute(path)?.display()
        );
        Ok(Some(fs::read_to_string(path)?))
    } else {
        Ok(None)
    }
}

/* unified diff of two outputs, or None if nothing changed */
pub fn find_diff_in_output(old_output: &str, new_output: &str) -> Option<String> {
    let diff = TextDiff::from_lines(old_output, new_output);
    if diff.ratio() != 1.0 {
        Some(diff.unified_diff().header("previous", "current").to_string())
    } else {
        None
    }
}

pub fn write_output(path: &Path, output: &str) -> Result<(), Box<dyn Error>> {
    info!(
        "Writing output to {}",
        std::path::absolute(path)?.display()
    );
    Ok(fs::write(path, output)?)
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
