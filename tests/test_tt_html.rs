use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use figment::providers::Env;
use figment::providers::Format;
use figment::providers::Json;
use figment::Figment;
use lib::tt_html::models::schedule_model::{Faculty, Group, LessonType, Schedule, ScheduleDay};
use lib::tt_html::models::{Args, Command, Config};
use lib::tt_html::run_tool::run;
use lib::tt_html::schedule_getter::ScheduleGetter;

/// Serves pages from files instead of the timetable site.
pub struct TestGetter {
    pub groups_page_path: String,
    pub schedule_page_path: String,
}

impl ScheduleGetter for TestGetter {
    async fn get_groups_page(
        &self,
        faculty_id: &str,
        _date: NaiveDate,
    ) -> Result<String, reqwest::Error> {
        // only the first faculty has groups
        if faculty_id == "1" {
            Ok(fs::read_to_string(&self.groups_page_path).unwrap())
        } else {
            Ok("<html><body><select name='group'></select></body></html>".to_string())
        }
    }

    async fn get_group_page(
        &self,
        _group_id: &str,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> Result<String, reqwest::Error> {
        Ok(fs::read_to_string(&self.schedule_page_path).unwrap())
    }

    async fn get_room_page(
        &self,
        _room: &str,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> Result<String, reqwest::Error> {
        Ok(fs::read_to_string(&self.schedule_page_path).unwrap())
    }

    async fn get_teacher_page(
        &self,
        _teacher: &str,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> Result<String, reqwest::Error> {
        // a page where one header lost its table
        Ok("<h3>01.09.2025 Понедельник (2-я неделя)</h3><p>Нет занятий</p>".to_string())
    }
}

fn test_getter() -> TestGetter {
    TestGetter {
        groups_page_path: "tests/test.groups.html".to_string(),
        schedule_page_path: "tests/test.group_schedule.html".to_string(),
    }
}

fn test_config() -> Config {
    Figment::new()
        .merge(Json::file("example.config.json"))
        .merge(Env::prefixed("TT_"))
        .extract()
        .unwrap()
}

fn date(day: u32, month: u32, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[tokio::test]
async fn test_group_schedule() {
    let out_dir = tempfile::tempdir().unwrap();
    let output_json_path = out_dir.path().join("schedule.json");
    let args = Args {
        config_json_path: PathBuf::from("example.config.json"),
        output_json_path: Some(output_json_path.clone()),
        command: Command::Schedule {
            group: "4711".to_string(),
            start: date(1, 9, 2025),
            end: None,
            faculty: Some("1".to_string()),
        },
    };

    let output = run(&test_getter(), &args, &test_config()).await.unwrap();
    let schedule: Schedule = serde_json::from_str(&output).unwrap();

    assert_eq!(schedule.group_id, "4711");
    assert_eq!(schedule.group_name, "БО241ИСТ");
    assert_eq!(schedule.faculty_id, Some("1".to_string()));
    assert_eq!(schedule.end_date, date(8, 9, 2025));
    assert_eq!(
        schedule.days.iter().map(|d| d.date).collect::<Vec<_>>(),
        vec![date(1, 9, 2025), date(2, 9, 2025)]
    );

    let monday = &schedule.days[0];
    assert_eq!(monday.weekday, "Понедельник");
    assert_eq!(monday.week_number, Some(2));
    assert_eq!(monday.is_even_week, Some(true));
    assert_eq!(monday.lessons.len(), 1);
    assert_eq!(monday.lessons[0].lesson_type, LessonType::Laboratory);
    assert_eq!(monday.lessons[0].subject, "Физика");
    assert_eq!(monday.lessons[0].room, Some("Лаб. 105".to_string()));
    assert_eq!(monday.lessons[0].groups, vec!["БО241ИСТ", "БО242ИСТ"]);
    assert_eq!(monday.lessons[0].teacher, None);

    let tuesday = &schedule.days[1];
    assert_eq!(
        tuesday
            .lessons
            .iter()
            .map(|l| l.pair_number)
            .collect::<Vec<_>>(),
        vec![2, 3]
    );
    let analysis = &tuesday.lessons[0];
    assert_eq!(analysis.time_start, "09:50");
    assert_eq!(analysis.time_end, "11:20");
    assert_eq!(analysis.lesson_type, LessonType::Lecture);
    assert_eq!(analysis.room, None);
    assert_eq!(
        analysis.online,
        Some("Zoom Идентификатор конференции: 845 112 3090 Код доступа: 5521".to_string())
    );
    assert_eq!(
        analysis.teacher.as_ref().map(|t| t.name.as_str()),
        Some("Иванова Мария Сергеевна")
    );
    let python = &tuesday.lessons[1];
    assert_eq!(python.lesson_type, LessonType::Practice);
    assert_eq!(python.subject, "Программирование на Python");
    assert_eq!(python.room, Some("214".to_string()));
    assert_eq!(
        python.teacher.as_ref().and_then(|t| t.email.as_deref()),
        Some("sidorov@example.edu")
    );

    // result is stored and a second launch overwrites it
    assert_eq!(fs::read_to_string(&output_json_path).unwrap(), output);
    let output_again = run(&test_getter(), &args, &test_config()).await.unwrap();
    assert_eq!(fs::read_to_string(&output_json_path).unwrap(), output_again);
}

#[tokio::test]
async fn test_groups_of_all_faculties() {
    let args = Args {
        config_json_path: PathBuf::from("example.config.json"),
        output_json_path: None,
        command: Command::Groups {
            faculty: None,
            date: Some(date(1, 9, 2025)),
        },
    };

    let output = run(&test_getter(), &args, &test_config()).await.unwrap();
    let groups: Vec<Group> = serde_json::from_str(&output).unwrap();

    assert_eq!(
        groups,
        vec![
            Group {
                id: "4711".to_string(),
                name: "БО241ИСТ".to_string(),
                full_name: "Информационные системы и технологии".to_string(),
                faculty_id: "1".to_string(),
            },
            Group {
                id: "4712".to_string(),
                name: "БО242ИСТ".to_string(),
                full_name: "Информационные системы и технологии".to_string(),
                faculty_id: "1".to_string(),
            },
            Group {
                id: "4705".to_string(),
                name: "БП231ПИ".to_string(),
                full_name: "Прикладная информатика".to_string(),
                faculty_id: "1".to_string(),
            },
        ]
    );
}

#[tokio::test]
async fn test_groups_of_faculty_without_groups() {
    let args = Args {
        config_json_path: PathBuf::from("example.config.json"),
        output_json_path: None,
        command: Command::Groups {
            faculty: Some("2".to_string()),
            date: Some(date(1, 9, 2025)),
        },
    };

    let output = run(&test_getter(), &args, &test_config()).await.unwrap();
    let groups: Vec<Group> = serde_json::from_str(&output).unwrap();

    assert!(groups.is_empty());
}

#[tokio::test]
async fn test_room_and_teacher_days() {
    let room_args = Args {
        config_json_path: PathBuf::from("example.config.json"),
        output_json_path: None,
        command: Command::Room {
            room: "214".to_string(),
            start: date(1, 9, 2025),
            end: Some(date(7, 9, 2025)),
        },
    };
    let output = run(&test_getter(), &room_args, &test_config()).await.unwrap();
    let days: Vec<ScheduleDay> = serde_json::from_str(&output).unwrap();
    assert_eq!(days.len(), 2);

    let teacher_args = Args {
        config_json_path: PathBuf::from("example.config.json"),
        output_json_path: None,
        command: Command::Teacher {
            teacher: "Иванова Мария Сергеевна".to_string(),
            start: date(1, 9, 2025),
            end: None,
        },
    };
    let output = run(&test_getter(), &teacher_args, &test_config()).await.unwrap();
    let days: Vec<ScheduleDay> = serde_json::from_str(&output).unwrap();
    assert!(days.is_empty());
}

#[tokio::test]
async fn test_faculties_from_config() {
    let args = Args {
        config_json_path: PathBuf::from("example.config.json"),
        output_json_path: None,
        command: Command::Faculties,
    };

    let output = run(&test_getter(), &args, &test_config()).await.unwrap();
    let faculties: Vec<Faculty> = serde_json::from_str(&output).unwrap();

    assert_eq!(faculties.len(), 2);
    assert_eq!(faculties[0].id, "1");
}
