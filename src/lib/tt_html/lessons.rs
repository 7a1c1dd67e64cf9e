use log::debug;

use super::{
    helpers::sort_lessons,
    models::schedule_model::{Lesson, LessonType, Teacher},
    patterns::{
        clean_text, find_all, find_first, group, non_blank, GROUP_NAME, LESSON_GROUPS,
        ONLINE_KEYWORD, ONLINE_MEETING, PAIR_NUMBER, ROOM, ROW, TEACHER, TIME_RANGE,
        TYPE_SUBJECT,
    },
};

/// Decodes every row of a day table into lessons, sorted by pair number.
/// Rows without a pair number or a time range are skipped.
pub fn decode_lessons(table_content: &str) -> Vec<Lesson> {
    let mut lessons = find_all(&ROW, table_content)
        .filter_map(|row| group(&row, 1).and_then(decode_lesson_row))
        .collect::<Vec<_>>();
    sort_lessons(&mut lessons);
    lessons
}

/// Decodes one `<tr>` fragment. Returns `None` only when the pair number or
/// the time range is missing, every other field is optional.
pub fn decode_lesson_row(row: &str) -> Option<Lesson> {
    let Some(pair_number) = find_first(&PAIR_NUMBER, row, 1).and_then(|n| n.parse::<u8>().ok())
    else {
        debug!("Skipping row without pair number");
        return None;
    };
    let Some((time_start, time_end)) =
        find_first(&TIME_RANGE, row, 1).and_then(|range| range.split_once('-'))
    else {
        debug!("Skipping pair {} without time range", pair_number);
        return None;
    };

    let (lesson_type, subject) = decode_type_and_subject(row);

    Some(Lesson {
        pair_number,
        time_start: time_start.trim().to_owned(),
        time_end: time_end.trim().to_owned(),
        lesson_type,
        subject,
        room: decode_room(row),
        teacher: decode_teacher(row),
        groups: decode_groups_of_lesson(row),
        online: decode_online(row),
    })
}

fn decode_type_and_subject(row: &str) -> (LessonType, String) {
    match TYPE_SUBJECT.captures(row) {
        Some(captures) => (
            group(&captures, 1).map_or(LessonType::Unknown, LessonType::from_label),
            group(&captures, 2).map(clean_text).unwrap_or_default(),
        ),
        None => (LessonType::Unknown, String::new()),
    }
}

/* the type+subject block can mention a keyword too, it starts with `(` */
fn decode_online(row: &str) -> Option<String> {
    find_all(&ONLINE_MEETING, row)
        .filter_map(|captures| group(&captures, 1).map(clean_text))
        .find(|text| !text.starts_with('('))
        .and_then(non_blank)
}

fn decode_room(row: &str) -> Option<String> {
    find_first(&ROOM, row, 1).map(clean_text).and_then(non_blank)
}

fn decode_groups_of_lesson(row: &str) -> Vec<String> {
    find_first(&LESSON_GROUPS, row, 1)
        .map(|names| {
            names
                .split([',', ';'])
                .map(clean_text)
                .filter(|name| !name.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

/// Teacher info is the last block of its shape in a row. Blocks that are
/// recognizably another field (type+subject, online meeting) are passed over
/// first, the remaining last one is dropped if it still does not look like a name.
fn decode_teacher(row: &str) -> Option<Teacher> {
    let (name, email) = find_all(&TEACHER, row)
        .filter_map(|captures| {
            let name = group(&captures, 1).map(clean_text)?;
            let email = group(&captures, 2).map(|email| email.trim().to_owned());
            Some((name, email))
        })
        .filter(|(name, _)| !is_other_field(name))
        .last()?;
    let name = non_blank(name)?;
    if is_misplaced_teacher_name(&name) {
        debug!("Rejecting teacher candidate {:?}", name);
        return None;
    }
    Some(Teacher { name, email })
}

fn is_other_field(text: &str) -> bool {
    text.starts_with('(') || ONLINE_KEYWORD.is_match(text)
}

fn is_misplaced_teacher_name(name: &str) -> bool {
    name.contains("wrap") || GROUP_NAME.is_match(name)
}
