//! Creation form model and its validation rules.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{dates, CreateStudentRequest};

pub const MIN_STUDY_START_YEAR: i32 = 2000;

pub fn min_birthday() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Input fields of the creation form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StudentField {
    Surname,
    Name,
    Lastname,
    Birthday,
    StudyStart,
    Faculty,
}

impl StudentField {
    pub const ALL: [StudentField; 6] = [
        StudentField::Surname,
        StudentField::Name,
        StudentField::Lastname,
        StudentField::Birthday,
        StudentField::StudyStart,
        StudentField::Faculty,
    ];

    /// DOM id and form name of the input
    pub fn input_id(&self) -> &'static str {
        match self {
            StudentField::Surname => "surname",
            StudentField::Name => "name",
            StudentField::Lastname => "lastname",
            StudentField::Birthday => "birthday",
            StudentField::StudyStart => "studyStart",
            StudentField::Faculty => "faculty",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StudentField::Surname => "Фамилия",
            StudentField::Name => "Имя",
            StudentField::Lastname => "Отчество",
            StudentField::Birthday => "Дата рождения",
            StudentField::StudyStart => "Год начала обучения",
            StudentField::Faculty => "Факультет",
        }
    }

    fn required_message(&self) -> &'static str {
        match self {
            StudentField::Surname => "Фамилия обязательна для заполнения",
            StudentField::Name => "Имя обязательно для заполнения",
            StudentField::Lastname => "Отчество обязательно для заполнения",
            StudentField::Birthday => "Дата рождения обязательна для заполнения",
            StudentField::StudyStart => "Год начала обучения обязателен для заполнения",
            StudentField::Faculty => "Факультет обязателен для заполнения",
        }
    }
}

/// Raw values of the creation form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentDraft {
    pub surname: String,
    pub name: String,
    pub lastname: String,
    /// YYYY-MM-DD as produced by a date input
    pub birthday: String,
    pub study_start: String,
    pub faculty: String,
}

impl StudentDraft {
    pub fn get(&self, field: StudentField) -> &str {
        match field {
            StudentField::Surname => &self.surname,
            StudentField::Name => &self.name,
            StudentField::Lastname => &self.lastname,
            StudentField::Birthday => &self.birthday,
            StudentField::StudyStart => &self.study_start,
            StudentField::Faculty => &self.faculty,
        }
    }

    pub fn set(&mut self, field: StudentField, value: String) {
        match field {
            StudentField::Surname => self.surname = value,
            StudentField::Name => self.name = value,
            StudentField::Lastname => self.lastname = value,
            StudentField::Birthday => self.birthday = value,
            StudentField::StudyStart => self.study_start = value,
            StudentField::Faculty => self.faculty = value,
        }
    }

    pub fn trimmed(&self) -> Self {
        Self {
            surname: self.surname.trim().to_string(),
            name: self.name.trim().to_string(),
            lastname: self.lastname.trim().to_string(),
            birthday: self.birthday.trim().to_string(),
            study_start: self.study_start.trim().to_string(),
            faculty: self.faculty.trim().to_string(),
        }
    }

    /// Returns the ordered list of problems with this draft; empty means valid.
    pub fn validate(&self, today: NaiveDate) -> Vec<String> {
        let draft = self.trimmed();
        let mut errors: Vec<String> = StudentField::ALL
            .iter()
            .filter(|field| draft.get(**field).is_empty())
            .map(|field| field.required_message().to_string())
            .collect();

        if !draft.birthday.is_empty() {
            match dates::parse_date(&draft.birthday) {
                Some(birth_date) => {
                    if birth_date < min_birthday() {
                        errors.push("Дата рождения не может быть раньше 01.01.1900".to_string());
                    }
                    if birth_date > today {
                        errors.push("Дата рождения не может быть в будущем".to_string());
                    }
                }
                None => errors.push("Некорректная дата рождения".to_string()),
            }
        }

        if !draft.study_start.is_empty() {
            match draft.study_start.parse::<i32>() {
                Ok(year) => {
                    if year < MIN_STUDY_START_YEAR {
                        errors.push(format!(
                            "Год начала обучения не может быть меньше {}",
                            MIN_STUDY_START_YEAR
                        ));
                    }
                    if year > today.year() {
                        errors.push("Год начала обучения не может быть в будущем".to_string());
                    }
                }
                Err(_) => errors.push("Год начала обучения должен быть числом".to_string()),
            }
        }

        errors
    }

    /// Validate and build the request body. Only a valid draft yields a request.
    pub fn to_request(&self, today: NaiveDate) -> Result<CreateStudentRequest, Vec<String>> {
        let errors = self.validate(today);
        if !errors.is_empty() {
            return Err(errors);
        }

        let draft = self.trimmed();
        let birth_date = dates::parse_date(&draft.birthday)
            .ok_or_else(|| vec!["Некорректная дата рождения".to_string()])?;

        Ok(CreateStudentRequest {
            surname: draft.surname,
            name: draft.name,
            lastname: draft.lastname,
            birthday: dates::to_utc_timestamp(birth_date),
            study_start: draft.study_start,
            faculty: draft.faculty,
        })
    }
}
