use log::debug;

use super::{
    helpers::sort_groups,
    models::schedule_model::Group,
    patterns::{find_all, group, GROUP_OPTION, GROUP_SEPARATOR},
};

/// Decodes the group selection list of a faculty page, sorted by short name.
/// A page without groups gives an empty list.
pub fn decode_groups(response_body: &str, faculty_id: &str) -> Vec<Group> {
    let mut groups = find_all(&GROUP_OPTION, response_body)
        .filter_map(|option| {
            let (name, full_name) = split_group_label(group(&option, 2)?)?;
            Some(Group {
                id: group(&option, 1)?.to_owned(),
                name: name.trim().to_owned(),
                full_name: full_name.trim().to_owned(),
                faculty_id: faculty_id.to_owned(),
            })
        })
        .collect::<Vec<_>>();
    debug!("Found {} groups of faculty {}", groups.len(), faculty_id);
    sort_groups(&mut groups);
    groups
}

/// Splits `ИВТ-21 -Информатика` into short and full name. A bare hyphen only
/// separates them when no hyphen follows whitespace.
fn split_group_label(label: &str) -> Option<(&str, &str)> {
    match GROUP_SEPARATOR.find(label) {
        Some(separator) => Some((&label[..separator.start()], &label[separator.end()..])),
        None => label.split_once('-'),
    }
}
