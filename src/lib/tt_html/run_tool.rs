use std::error::Error;

use chrono::{Local, NaiveDate};
use futures::future;
use log::info;

use super::{
    days::decode_schedule_days,
    groups::decode_groups,
    helpers::{
        decode_schedule, find_diff_in_output, read_previous_output, schedule_end_date,
        sort_groups, write_output,
    },
    models::{schedule_model::Group, Args, Command, Config},
    schedule_getter::ScheduleGetter,
};

/// Runs the command from `args` and returns its result as pretty JSON.
/// With an output path the JSON is also stored there and the difference to the
/// previously stored result is logged.
pub async fn run<SG: ScheduleGetter>(
    schedule_getter: &SG,
    args: &Args,
    config: &Config,
) -> Result<String, Box<dyn Error>> {
    let output = match &args.command {
        Command::Faculties => serde_json::to_string_pretty(&config.faculties)?,
        Command::Groups { faculty, date } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let groups = get_groups(schedule_getter, config, faculty.as_deref(), date).await?;
            info!("Collected {} groups", groups.len());
            serde_json::to_string_pretty(&groups)?
        }
        Command::Schedule {
            group,
            start,
            end,
            faculty,
        } => {
            let end_date = schedule_end_date(*start, *end);
            let page = schedule_getter
                .get_group_page(group, *start, end_date)
                .await?;
            let mut schedule = decode_schedule(&page, group, *start, Some(end_date));
            schedule.faculty_id = faculty.clone();
            info!(
                "Collected {} days for group {}",
                schedule.days.len(),
                schedule.group_name
            );
            serde_json::to_string_pretty(&schedule)?
        }
        Command::Room { room, start, end } => {
            let page = schedule_getter
                .get_room_page(room, *start, schedule_end_date(*start, *end))
                .await?;
            let days = decode_schedule_days(&page);
            info!("Collected {} days for room {}", days.len(), room);
            serde_json::to_string_pretty(&days)?
        }
        Command::Teacher {
            teacher,
            start,
            end,
        } => {
            let page = schedule_getter
                .get_teacher_page(teacher, *start, schedule_end_date(*start, *end))
                .await?;
            let days = decode_schedule_days(&page);
            info!("Collected {} days for teacher {}", days.len(), teacher);
            serde_json::to_string_pretty(&days)?
        }
    };

    if let Some(output_json_path) = &args.output_json_path {
        if let Some(previous) = read_previous_output(output_json_path)? {
            match find_diff_in_output(&previous, &output) {
                Some(diff) => info!("Result changed since the last launch:\n{}", diff),
                None => info!("Result did not change since the last launch"),
            }
        }
        write_output(output_json_path, &output)?;
    }

    Ok(output)
}

async fn get_groups<SG: ScheduleGetter>(
    schedule_getter: &SG,
    config: &Config,
    faculty: Option<&str>,
    date: NaiveDate,
) -> Result<Vec<Group>, Box<dyn Error>> {
    let faculty_ids = match faculty {
        Some(faculty) => vec![faculty.to_owned()],
        None => config
            .faculties
            .iter()
            .map(|faculty| faculty.id.clone())
            .collect(),
    };

    /* Collect listings of all requested faculties at once */
    let pages = future::join_all(
        faculty_ids
            .iter()
            .map(|id| schedule_getter.get_groups_page(id, date)),
    )
    .await
    .into_iter()
    .collect::<Result<Vec<_>, _>>()?;

    let mut groups = faculty_ids
        .iter()
        .zip(pages)
        .flat_map(|(id, page)| decode_groups(&page, id))
        .collect::<Vec<_>>();
    if faculty_ids.len() > 1 {
        sort_groups(&mut groups);
    }
    Ok(groups)
}
