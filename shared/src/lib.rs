use serde::{Deserialize, Deserializer, Serialize};

pub mod dates;
pub mod roster;
pub mod study;
pub mod validation;

pub use roster::{FilterField, Roster, SortDirection, SortField, SortState, StudentFilters};
pub use study::{CourseStatus, StudyInfo};
pub use validation::{StudentDraft, StudentField};

use chrono::NaiveDate;

/// A student record as returned by the roster API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Server-assigned identity, kept opaque (the API may send a string or a number)
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub surname: String,
    pub name: String,
    /// Patronymic
    pub lastname: String,
    /// RFC 3339 timestamp or plain YYYY-MM-DD date
    pub birthday: String,
    /// Enrollment year
    #[serde(deserialize_with = "string_or_number")]
    pub study_start: String,
    pub faculty: String,
}

impl Student {
    /// Surname, given name and patronymic joined by spaces
    pub fn full_name(&self) -> String {
        format!("{} {} {}", self.surname, self.name, self.lastname)
    }

    pub fn birth_date(&self) -> Option<NaiveDate> {
        dates::parse_date(&self.birthday)
    }

    pub fn start_year(&self) -> Option<i32> {
        self.study_start.trim().parse::<i32>().ok()
    }

    /// Graduation year, always four years after enrollment
    pub fn end_year(&self) -> Option<i32> {
        self.start_year()
            .and_then(|year| year.checked_add(study::STUDY_DURATION_YEARS))
    }
}

/// Request body for `POST /api/students`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentRequest {
    pub surname: String,
    pub name: String,
    pub lastname: String,
    /// Normalized timestamp, e.g. "2000-05-01T00:00:00.000Z"
    pub birthday: String,
    pub study_start: String,
    pub faculty: String,
}

/// Error body the API may attach to a non-success response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// A student row prepared for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedStudent {
    pub id: String,
    pub full_name: String,
    pub faculty: String,
    /// "dd.mm.yyyy (N лет)"
    pub birthday_display: String,
    /// "start-end (course)"
    pub study_display: String,
    pub age: Option<i32>,
    pub study_info: Option<StudyInfo>,
}

impl FormattedStudent {
    pub fn from_student(student: &Student, today: NaiveDate) -> Self {
        let birth_date = student.birth_date();
        let age = birth_date.map(|date| study::calculate_age(date, today));
        let study_info = student
            .start_year()
            .and_then(|year| StudyInfo::for_start_year(year, today));

        let birthday_display = match (birth_date, age) {
            (Some(date), Some(age)) => {
                format!("{} ({} лет)", dates::format_display_date(date), age)
            }
            _ => student.birthday.clone(),
        };

        let study_display = match &study_info {
            Some(info) => format!("{} ({})", info.period(), info.course_label()),
            None => student.study_start.clone(),
        };

        Self {
            id: student.id.clone(),
            full_name: student.full_name(),
            faculty: student.faculty.clone(),
            birthday_display,
            study_display,
            age,
            study_info,
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::Text(text) => text,
        StringOrNumber::Integer(value) => value.to_string(),
        StringOrNumber::Float(value) => value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_deserialize_student_with_numeric_fields() {
        let json = r#"{
            "id": 17,
            "surname": "Иванов",
            "name": "Иван",
            "lastname": "Иванович",
            "birthday": "2000-05-01T00:00:00.000Z",
            "studyStart": 2020,
            "faculty": "Физический",
            "createdAt": "ignored"
        }"#;

        let student: Student = serde_json::from_str(json).unwrap();
        assert_eq!(student.id, "17");
        assert_eq!(student.study_start, "2020");
        assert_eq!(student.start_year(), Some(2020));
        assert_eq!(student.end_year(), Some(2024));
        assert_eq!(student.birth_date(), Some(date(2000, 5, 1)));
    }

    #[test]
    fn test_deserialize_student_with_string_fields() {
        let json = r#"{
            "id": "a1b2",
            "surname": "Петрова",
            "name": "Анна",
            "lastname": "Сергеевна",
            "birthday": "1999-12-31",
            "studyStart": "2018",
            "faculty": "Химический"
        }"#;

        let student: Student = serde_json::from_str(json).unwrap();
        assert_eq!(student.id, "a1b2");
        assert_eq!(student.full_name(), "Петрова Анна Сергеевна");
        assert_eq!(student.birth_date(), Some(date(1999, 12, 31)));
    }

    #[test]
    fn test_create_request_uses_camel_case() {
        let request = CreateStudentRequest {
            surname: "Иванов".to_string(),
            name: "Иван".to_string(),
            lastname: "Иванович".to_string(),
            birthday: "2000-05-01T00:00:00.000Z".to_string(),
            study_start: "2020".to_string(),
            faculty: "Физический".to_string(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["studyStart"], "2020");
        assert!(value.get("study_start").is_none());
    }

    #[test]
    fn test_error_body_message_is_optional() {
        let body: ApiErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.message, None);

        let body: ApiErrorBody = serde_json::from_str(r#"{"message":"Duplicate"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("Duplicate"));
    }

    #[test]
    fn test_formatted_student_display() {
        let student = Student {
            id: "1".to_string(),
            surname: "Иванов".to_string(),
            name: "Иван".to_string(),
            lastname: "Иванович".to_string(),
            birthday: "2000-05-01T00:00:00.000Z".to_string(),
            study_start: "2020".to_string(),
            faculty: "Физический".to_string(),
        };

        let row = FormattedStudent::from_student(&student, date(2022, 10, 17));
        assert_eq!(row.full_name, "Иванов Иван Иванович");
        assert_eq!(row.birthday_display, "01.05.2000 (22 лет)");
        assert_eq!(row.study_display, "2020-2024 (3 курс)");
        assert_eq!(row.age, Some(22));
    }

    #[test]
    fn test_extreme_study_start_falls_back_to_raw_value() {
        let student = Student {
            id: "3".to_string(),
            surname: "А".to_string(),
            name: "Б".to_string(),
            lastname: "В".to_string(),
            birthday: "2000-05-01".to_string(),
            study_start: "2147483647".to_string(),
            faculty: "Г".to_string(),
        };

        assert_eq!(student.start_year(), Some(i32::MAX));
        assert_eq!(student.end_year(), None);

        let row = FormattedStudent::from_student(&student, date(2026, 10, 17));
        assert_eq!(row.study_display, "2147483647");
        assert_eq!(row.study_info, None);
    }

    #[test]
    fn test_formatted_student_keeps_raw_values_when_unparseable() {
        let student = Student {
            id: "2".to_string(),
            surname: "А".to_string(),
            name: "Б".to_string(),
            lastname: "В".to_string(),
            birthday: "unknown".to_string(),
            study_start: "n/a".to_string(),
            faculty: "Г".to_string(),
        };

        let row = FormattedStudent::from_student(&student, date(2022, 10, 17));
        assert_eq!(row.birthday_display, "unknown");
        assert_eq!(row.study_display, "n/a");
        assert_eq!(row.age, None);
        assert_eq!(row.study_info, None);
    }
}
