use caltally_domain::{Appointment, CategoryDefinition, TallyRequest};
use chrono::{NaiveDate, NaiveDateTime};

pub const CALENDAR: &str = "Team Calendar";

/// Date-time in March 2024. The 4th is a Monday, the 9th a Saturday.
pub fn march(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, day).unwrap().and_hms_opt(hour, minute, 0).unwrap()
}

pub fn appointment(subject: &str, start: NaiveDateTime, end: NaiveDateTime) -> Appointment {
    Appointment::new(subject, start, end)
}

/// MEETING (matched by name) and TRAVEL (matched by FLIGHT or TRAIN)
pub fn meeting_and_travel() -> Vec<CategoryDefinition> {
    vec![
        CategoryDefinition::new("MEETING"),
        CategoryDefinition::with_aliases("TRAVEL", ["FLIGHT", "TRAIN"]),
    ]
}

/// Request over all of March for `categories`
pub fn march_request(categories: Vec<CategoryDefinition>) -> TallyRequest {
    TallyRequest::new(CALENDAR, march(1, 0, 0), march(31, 23, 59), categories)
}
