pub mod filters_panel;
pub mod forms;
pub mod header;
pub mod students;

pub use filters_panel::FiltersPanel;
pub use forms::StudentForm;
pub use header::Header;
pub use students::StudentTable;
