use chrono::NaiveDate;
use log::{debug, warn};
use regex::Captures;

use super::{
    helpers::sort_days,
    lessons::decode_lessons,
    models::schedule_model::ScheduleDay,
    patterns::{find_all, group, DAY_HEADER, DAY_TABLE},
};

/// Decodes all days of a schedule page, sorted by date.
///
/// Day headers and day tables are matched independently and paired by
/// position. If their counts differ the alignment is unknown and no days are
/// returned at all.
pub fn decode_schedule_days(response_body: &str) -> Vec<ScheduleDay> {
    let headers = find_all(&DAY_HEADER, response_body).collect::<Vec<_>>();
    let tables = find_all(&DAY_TABLE, response_body)
        .filter_map(|table| group(&table, 1))
        .collect::<Vec<_>>();

    if headers.len() != tables.len() {
        warn!(
            "Found {} day headers but {} day tables, dropping the page",
            headers.len(),
            tables.len()
        );
        return Vec::new();
    }
    debug!("Found {} days", headers.len());

    let mut days = headers
        .iter()
        .zip(tables)
        .filter_map(|(header, table)| decode_day(header, table))
        .collect::<Vec<_>>();
    sort_days(&mut days);
    days
}

fn decode_day(header: &Captures, table_content: &str) -> Option<ScheduleDay> {
    let date_text = group(header, 1)?;
    let Ok(date) = NaiveDate::parse_from_str(date_text, "%d.%m.%Y") else {
        debug!("Skipping day with malformed date {:?}", date_text);
        return None;
    };
    let week_number = match group(header, 3) {
        Some(week) => match week.trim().parse::<u32>() {
            Ok(week) => Some(week),
            Err(_) => {
                debug!("Skipping {} with malformed week number {:?}", date, week);
                return None;
            }
        },
        None => None,
    };

    Some(ScheduleDay {
        date,
        weekday: group(header, 2).unwrap_or_default().trim().to_owned(),
        week_number,
        is_even_week: week_number.map(is_even_week),
        lessons: decode_lessons(table_content),
    })
}

pub fn is_even_week(week_number: u32) -> bool {
    week_number % 2 == 0
}
