pub mod student_form;

pub use student_form::StudentForm;
