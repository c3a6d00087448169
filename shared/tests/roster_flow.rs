use chrono::NaiveDate;
use shared::{Roster, SortField, Student, StudentDraft};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
}

/// What the API echoes back for a created student
fn server_echo(id: u32, body: &serde_json::Value) -> Student {
    let mut created = body.clone();
    created["id"] = serde_json::json!(id);
    serde_json::from_value(created).unwrap()
}

#[test]
fn create_render_and_delete_student() {
    let listed: Vec<Student> = serde_json::from_str(
        r#"[{
            "id": 1,
            "surname": "Смирнова",
            "name": "Ольга",
            "lastname": "Викторовна",
            "birthday": "1998-02-10T00:00:00.000Z",
            "studyStart": "2016",
            "faculty": "Исторический"
        }]"#,
    )
    .unwrap();
    let mut roster = Roster::with_students(listed);

    let draft = StudentDraft {
        surname: "Иванов".to_string(),
        name: "Иван".to_string(),
        lastname: "Иванович".to_string(),
        birthday: "2000-05-01".to_string(),
        study_start: "2020".to_string(),
        faculty: "Физический".to_string(),
    };
    let request = draft.to_request(today()).unwrap();
    let body = serde_json::to_value(&request).unwrap();
    assert_eq!(body["birthday"], "2000-05-01T00:00:00.000Z");

    roster.add_student(server_echo(2, &body));

    let rows = roster.rows(today());
    assert_eq!(rows.len(), 2);
    let created = rows.iter().find(|row| row.id == "2").unwrap();
    assert_eq!(created.full_name, "Иванов Иван Иванович");
    assert_eq!(created.age, Some(26));
    assert_eq!(created.birthday_display, "01.05.2000 (26 лет)");
    assert!(created.study_display.starts_with("2020-2024"));
    assert_eq!(created.study_display, "2020-2024 (закончил)");

    assert!(roster.remove_student("2"));
    let rows = roster.rows(today());
    assert_eq!(rows.len(), 1);
    assert!(rows.iter().all(|row| row.id != "2"));
}

#[test]
fn invalid_draft_never_produces_a_request() {
    let draft = StudentDraft {
        surname: "Иванов".to_string(),
        birthday: "1890-01-01".to_string(),
        study_start: "2030".to_string(),
        ..Default::default()
    };

    let errors = draft.to_request(today()).unwrap_err();
    assert_eq!(
        errors,
        vec![
            "Имя обязательно для заполнения",
            "Отчество обязательно для заполнения",
            "Факультет обязателен для заполнения",
            "Дата рождения не может быть раньше 01.01.1900",
            "Год начала обучения не может быть в будущем",
        ]
    );
}

#[test]
fn repeated_header_clicks_toggle_direction() {
    let students: Vec<Student> = serde_json::from_str(
        r#"[
            {"id": "x", "surname": "Б", "name": "Б", "lastname": "Б", "birthday": "2001-01-01", "studyStart": 2020, "faculty": "Ф"},
            {"id": "y", "surname": "А", "name": "А", "lastname": "А", "birthday": "2002-01-01", "studyStart": 2021, "faculty": "Ф"}
        ]"#,
    )
    .unwrap();
    let mut roster = Roster::with_students(students);

    let order = |roster: &Roster| -> Vec<String> {
        roster.filtered().iter().map(|s| s.id.clone()).collect()
    };

    assert_eq!(order(&roster), vec!["y", "x"]);
    roster.select_sort(SortField::Fio);
    assert_eq!(order(&roster), vec!["x", "y"]);
    roster.select_sort(SortField::StudyStart);
    assert_eq!(order(&roster), vec!["x", "y"]);
    roster.select_sort(SortField::StudyStart);
    assert_eq!(order(&roster), vec!["y", "x"]);
}
