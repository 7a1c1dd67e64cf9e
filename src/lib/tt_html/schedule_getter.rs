use std::time::Duration;

use chrono::NaiveDate;
use log::info;
use reqwest::Client;

use super::models::Config;

/// A trait, necessary for every entity that will be used for getting raw schedule pages.
/// Implementors only deliver the response body, decoding happens elsewhere.
#[allow(async_fn_in_trait)]
pub trait ScheduleGetter {
    async fn get_groups_page(
        &self,
        faculty_id: &str,
        date: NaiveDate,
    ) -> Result<String, reqwest::Error>;

    async fn get_group_page(
        &self,
        group_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<String, reqwest::Error>;

    async fn get_room_page(
        &self,
        room: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<String, reqwest::Error>;

    async fn get_teacher_page(
        &self,
        teacher: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<String, reqwest::Error>;
}

/// Gets pages from the timetable site via plain GET requests.
pub struct HttpGetter {
    pub client: Client,
    pub config: Config,
}

pub fn format_query_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

impl HttpGetter {
    pub fn new(config: Config) -> HttpGetter {
        HttpGetter {
            client: Client::new(),
            config,
        }
    }

    async fn get_page(&self, path: &str, query: &[(&str, String)]) -> Result<String, reqwest::Error> {
        let request_url = format!("{}{}", self.config.base_url, path);
        info!("Getting {} with {:?}", request_url, query);
        let response = self
            .client
            .get(request_url)
            .query(query)
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .send()
            .await?
            .error_for_status()?;
        response.text().await
    }

    async fn get_window_page(
        &self,
        path: &str,
        key: &str,
        value: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<String, reqwest::Error> {
        self.get_page(
            path,
            &[
                (key, value.to_owned()),
                ("start", format_query_date(start)),
                ("end", format_query_date(end)),
            ],
        )
        .await
    }
}

/// Allows HttpGetter to fetch every kind of page the timetable renders.
impl ScheduleGetter for HttpGetter {
    async fn get_groups_page(
        &self,
        faculty_id: &str,
        date: NaiveDate,
    ) -> Result<String, reqwest::Error> {
        self.get_page(
            &self.config.groups_path,
            &[
                ("faculty", faculty_id.to_owned()),
                ("date", format_query_date(date)),
            ],
        )
        .await
    }

    async fn get_group_page(
        &self,
        group_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<String, reqwest::Error> {
        self.get_window_page(&self.config.group_schedule_path, "group", group_id, start, end)
            .await
    }

    async fn get_room_page(
        &self,
        room: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<String, reqwest::Error> {
        self.get_window_page(&self.config.room_schedule_path, "room", room, start, end)
            .await
    }

    async fn get_teacher_page(
        &self,
        teacher: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<String, reqwest::Error> {
        self.get_window_page(&self.config.teacher_schedule_path, "teacher", teacher, start, end)
            .await
    }
}
