//! Roster state: the loaded students plus the filtered and sorted view.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{FormattedStudent, Student};

/// Sortable columns, named by their `data-sort` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortField {
    Fio,
    Faculty,
    Birthday,
    StudyStart,
}

impl SortField {
    pub const ALL: [SortField; 4] = [
        SortField::Fio,
        SortField::Faculty,
        SortField::Birthday,
        SortField::StudyStart,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Fio => "fio",
            SortField::Faculty => "faculty",
            SortField::Birthday => "birthday",
            SortField::StudyStart => "studyStart",
        }
    }

    /// Column header text
    pub fn title(&self) -> &'static str {
        match self {
            SortField::Fio => "ФИО",
            SortField::Faculty => "Факультет",
            SortField::Birthday => "Дата рождения и возраст",
            SortField::StudyStart => "Годы обучения и курс",
        }
    }

    fn compare(&self, a: &Student, b: &Student) -> Ordering {
        match self {
            SortField::Fio => a.full_name().cmp(&b.full_name()),
            SortField::Faculty => a.faculty.cmp(&b.faculty),
            SortField::Birthday => a.birth_date().cmp(&b.birth_date()),
            SortField::StudyStart => a.start_year().cmp(&b.start_year()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Suffix appended to the active column header
    pub fn indicator(&self) -> &'static str {
        match self {
            SortDirection::Asc => " ▼",
            SortDirection::Desc => " ▲",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            field: SortField::Fio,
            direction: SortDirection::Asc,
        }
    }
}

impl SortState {
    /// Reselecting the active column flips the direction; a new column starts ascending.
    pub fn select(&mut self, field: SortField) {
        if self.field == field {
            self.direction = self.direction.toggled();
        } else {
            *self = Self {
                field,
                direction: SortDirection::Asc,
            };
        }
    }

    pub fn compare(&self, a: &Student, b: &Student) -> Ordering {
        let ordering = self.field.compare(a, b);
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    /// Header suffix for `field`, empty unless it is the active column
    pub fn indicator_for(&self, field: SortField) -> &'static str {
        if self.field == field {
            self.direction.indicator()
        } else {
            ""
        }
    }
}

/// Filter inputs above the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterField {
    Fio,
    Faculty,
    StartYear,
    EndYear,
}

impl FilterField {
    pub const ALL: [FilterField; 4] = [
        FilterField::Fio,
        FilterField::Faculty,
        FilterField::StartYear,
        FilterField::EndYear,
    ];

    pub fn input_id(&self) -> &'static str {
        match self {
            FilterField::Fio => "filterFio",
            FilterField::Faculty => "filterFaculty",
            FilterField::StartYear => "filterStartYear",
            FilterField::EndYear => "filterEndYear",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FilterField::Fio => "Поиск по ФИО",
            FilterField::Faculty => "Поиск по факультету",
            FilterField::StartYear => "Год начала обучения",
            FilterField::EndYear => "Год окончания обучения",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentFilters {
    pub fio: String,
    pub faculty: String,
    pub start_year: String,
    pub end_year: String,
}

impl StudentFilters {
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Fio => &self.fio,
            FilterField::Faculty => &self.faculty,
            FilterField::StartYear => &self.start_year,
            FilterField::EndYear => &self.end_year,
        }
    }

    pub fn set(&mut self, field: FilterField, value: String) {
        match field {
            FilterField::Fio => self.fio = value,
            FilterField::Faculty => self.faculty = value,
            FilterField::StartYear => self.start_year = value,
            FilterField::EndYear => self.end_year = value,
        }
    }

    /// Every non-empty filter must match.
    pub fn matches(&self, student: &Student) -> bool {
        let fio = self.fio.trim();
        if !fio.is_empty()
            && !student
                .full_name()
                .to_lowercase()
                .contains(&fio.to_lowercase())
        {
            return false;
        }

        let faculty = self.faculty.trim();
        if !faculty.is_empty()
            && !student
                .faculty
                .to_lowercase()
                .contains(&faculty.to_lowercase())
        {
            return false;
        }

        let start_year = self.start_year.trim();
        if !start_year.is_empty() && student.study_start.trim() != start_year {
            return false;
        }

        let end_year = self.end_year.trim();
        if !end_year.is_empty()
            && student.end_year().map(|year| year.to_string()).as_deref() != Some(end_year)
        {
            return false;
        }

        true
    }
}

/// Students passing `filters`, in their original order
pub fn filter_students(students: &[Student], filters: &StudentFilters) -> Vec<Student> {
    students
        .iter()
        .filter(|student| filters.matches(student))
        .cloned()
        .collect()
}

/// Stable sort: equal keys keep their relative order in both directions.
pub fn sort_students(students: &mut [Student], sort: &SortState) {
    students.sort_by(|a, b| sort.compare(a, b));
}

/// Application state of the roster page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    students: Vec<Student>,
    filters: StudentFilters,
    sort: SortState,
    filtered: Vec<Student>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_students(students: Vec<Student>) -> Self {
        let mut roster = Self::new();
        roster.replace_students(students);
        roster
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// The filtered and sorted view
    pub fn filtered(&self) -> &[Student] {
        &self.filtered
    }

    pub fn filters(&self) -> &StudentFilters {
        &self.filters
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn replace_students(&mut self, students: Vec<Student>) {
        self.students = students;
        self.apply_filters();
    }

    pub fn add_student(&mut self, student: Student) {
        self.students.push(student);
        self.apply_filters();
    }

    /// Returns whether a student with `id` was present.
    pub fn remove_student(&mut self, id: &str) -> bool {
        let before = self.students.len();
        self.students.retain(|student| student.id != id);
        let removed = self.students.len() != before;
        if removed {
            self.apply_filters();
        }
        removed
    }

    pub fn set_filter(&mut self, field: FilterField, value: String) {
        self.filters.set(field, value);
        self.apply_filters();
    }

    pub fn select_sort(&mut self, field: SortField) {
        self.sort.select(field);
        self.apply_filters();
    }

    /// Rebuild the view from scratch.
    pub fn apply_filters(&mut self) {
        let mut filtered = filter_students(&self.students, &self.filters);
        sort_students(&mut filtered, &self.sort);
        self.filtered = filtered;
    }

    /// Display rows for the current view
    pub fn rows(&self, today: NaiveDate) -> Vec<FormattedStudent> {
        self.filtered
            .iter()
            .map(|student| FormattedStudent::from_student(student, today))
            .collect()
    }
}
