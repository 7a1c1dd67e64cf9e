//! Module with schedule model produced from the timetable's HTML pages
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Faculty {
    pub id: String,
    pub name: String,
}

#[derive(Deserialize, Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Group {
    pub id: String,
    pub name: String,
    pub full_name: String,
    pub faculty_id: String,
}

#[derive(Deserialize, Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Teacher {
    pub name: String,
    pub email: Option<String>,
}

#[derive(Deserialize, Debug, Serialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum LessonType {
    Lecture,
    Practice,
    Laboratory,
    #[default]
    Unknown,
}

impl LessonType {
    /// Maps a label like `Лекции` or `лаб.` to a lesson type.
    /// Comparison is case-insensitive and exact, so unknown labels never fail.
    pub fn from_label(label: &str) -> LessonType {
        match label.trim().to_lowercase().as_str() {
            "лекция" | "лекции" | "лекц." | "лек." => LessonType::Lecture,
            "практика"
            | "практики"
            | "практическое занятие"
            | "практические занятия"
            | "пр."
            | "семинар" => LessonType::Practice,
            "лабораторная работа" | "лабораторные работы" | "лабораторная" | "лаб."
            | "лаб. раб." => LessonType::Laboratory,
            _ => LessonType::Unknown,
        }
    }
}

#[derive(Deserialize, Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Lesson {
    pub pair_number: u8,
    pub time_start: String,
    pub time_end: String,
    pub lesson_type: LessonType,
    pub subject: String,
    pub room: Option<String>,
    pub teacher: Option<Teacher>,
    pub groups: Vec<String>,
    pub online: Option<String>,
}

#[derive(Deserialize, Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ScheduleDay {
    pub date: NaiveDate,
    pub weekday: String,
    pub week_number: Option<u32>,
    pub is_even_week: Option<bool>,
    pub lessons: Vec<Lesson>,
}

#[derive(Deserialize, Debug, Serialize, Clone, PartialEq)]
pub struct Schedule {
    pub group_id: String,
    pub group_name: String,
    pub faculty_id: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: Vec<ScheduleDay>,
    pub fetched_at: DateTime<Utc>,
}
