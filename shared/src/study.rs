//! Derived fields: age and academic period/course.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Length of a degree programme in years
pub const STUDY_DURATION_YEARS: i32 = 4;

/// The academic year starts in September
pub const ACADEMIC_YEAR_START_MONTH: u32 = 9;

/// Full years elapsed since `birth_date`, as of `today`
pub fn calculate_age(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

/// Where a student currently is in their programme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseStatus {
    /// Currently enrolled in the given course (1-based)
    Course(i32),
    Graduated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyInfo {
    pub start_year: i32,
    pub end_year: i32,
    pub status: CourseStatus,
}

impl StudyInfo {
    /// `None` when the year is too extreme for the period or course to be represented.
    pub fn for_start_year(start_year: i32, today: NaiveDate) -> Option<Self> {
        let end_year = start_year.checked_add(STUDY_DURATION_YEARS)?;
        let current_year = today.year();
        let after_cutoff = today.month() >= ACADEMIC_YEAR_START_MONTH;

        let status = if current_year > end_year || (current_year == end_year && after_cutoff) {
            CourseStatus::Graduated
        } else {
            let course = current_year
                .checked_sub(start_year)?
                .checked_add(i32::from(after_cutoff))?;
            CourseStatus::Course(course)
        };

        Some(Self {
            start_year,
            end_year,
            status,
        })
    }

    /// "2020-2024"
    pub fn period(&self) -> String {
        format!("{}-{}", self.start_year, self.end_year)
    }

    pub fn course_label(&self) -> String {
        match self.status {
            CourseStatus::Course(course) => format!("{} курс", course),
            CourseStatus::Graduated => "закончил".to_string(),
        }
    }
}
