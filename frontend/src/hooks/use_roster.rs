use std::rc::Rc;

use gloo::dialogs::{alert, confirm};
use shared::{
    FilterField, FormattedStudent, Roster, SortField, SortState, Student, StudentDraft,
    StudentFilters,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::{ApiClient, ApiError};
use crate::services::date_utils;
use crate::services::logging::Logger;

const COMPONENT: &str = "roster";

const LOAD_FAILED: &str = "Не удалось загрузить данные с сервера";
const CREATE_SUCCEEDED: &str = "Студент успешно добавлен!";
const CREATE_FAILED_GENERIC: &str = "Ошибка при создании студента";
const DELETE_CONFIRM: &str = "Вы уверены, что хотите удалить этого студента?";
const DELETE_SUCCEEDED: &str = "Студент успешно удален!";
const DELETE_FAILED: &str = "Не удалось удалить студента";

/// Mutations of the roster state
#[derive(Debug, Clone, PartialEq)]
pub enum RosterAction {
    Loaded(Vec<Student>),
    Created(Student),
    Removed(String),
    Filter(FilterField, String),
    Sort(SortField),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RosterState {
    pub roster: Roster,
    /// Bumped after every successful create so the form can reset itself
    pub created_count: u32,
}

impl Reducible for RosterState {
    type Action = RosterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            RosterAction::Loaded(students) => next.roster.replace_students(students),
            RosterAction::Created(student) => {
                next.roster.add_student(student);
                next.created_count = next.created_count.wrapping_add(1);
            }
            RosterAction::Removed(id) => {
                next.roster.remove_student(&id);
            }
            RosterAction::Filter(field, value) => next.roster.set_filter(field, value),
            RosterAction::Sort(field) => next.roster.select_sort(field),
        }
        Rc::new(next)
    }
}

/// Action for a finished list request; a failed load leaves the roster as it was.
fn load_outcome(result: Result<Vec<Student>, ApiError>) -> Result<RosterAction, ApiError> {
    result.map(RosterAction::Loaded)
}

/// Alert text for a rejected create
fn create_failure_message(error: &ApiError) -> String {
    format!(
        "Не удалось добавить студента: {}",
        error.server_message().unwrap_or(CREATE_FAILED_GENERIC)
    )
}

/// The id to send a DELETE for, or `None` when the user declines.
fn pending_delete(id: String, confirm: impl FnOnce(&str) -> bool) -> Option<String> {
    confirm(DELETE_CONFIRM).then_some(id)
}

#[derive(Clone)]
pub struct RosterViewState {
    pub rows: Vec<FormattedStudent>,
    pub sort: SortState,
    pub filters: StudentFilters,
    pub total: usize,
    pub loading: bool,
    pub submitting: bool,
    pub form_errors: Vec<String>,
    pub created_count: u32,
}

#[derive(Clone, PartialEq)]
pub struct UseRosterActions {
    pub load: Callback<()>,
    pub create: Callback<StudentDraft>,
    pub remove: Callback<String>,
    pub set_filter: Callback<(FilterField, String)>,
    pub sort: Callback<SortField>,
}

pub struct UseRosterResult {
    pub state: RosterViewState,
    pub actions: UseRosterActions,
}

#[hook]
pub fn use_roster(api_client: &ApiClient) -> UseRosterResult {
    let state = use_reducer(RosterState::default);
    let loading = use_state(|| false);
    let submitting = use_state(|| false);
    let form_errors = use_state(Vec::<String>::new);

    let load = {
        let api_client = api_client.clone();
        let dispatcher = state.dispatcher();
        let loading = loading.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let dispatcher = dispatcher.clone();
            let loading = loading.clone();

            spawn_local(async move {
                loading.set(true);

                match load_outcome(api_client.list_students().await) {
                    Ok(action) => {
                        if let RosterAction::Loaded(students) = &action {
                            Logger::info_with_component(
                                COMPONENT,
                                &format!("Loaded {} students", students.len()),
                            );
                        }
                        dispatcher.dispatch(action);
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            COMPONENT,
                            &format!("Failed to load students: {}", e),
                        );
                        alert(LOAD_FAILED);
                    }
                }

                loading.set(false);
            });
        })
    };

    let create = {
        let api_client = api_client.clone();
        let dispatcher = state.dispatcher();
        let submitting = submitting.clone();
        let form_errors = form_errors.clone();

        use_callback((), move |draft: StudentDraft, _| {
            let request = match draft.to_request(date_utils::today()) {
                Ok(request) => request,
                Err(errors) => {
                    Logger::warn_with_component(
                        COMPONENT,
                        &format!("Form rejected with {} errors", errors.len()),
                    );
                    form_errors.set(errors);
                    return;
                }
            };
            form_errors.set(Vec::new());

            let api_client = api_client.clone();
            let dispatcher = dispatcher.clone();
            let submitting = submitting.clone();

            spawn_local(async move {
                submitting.set(true);

                match api_client.create_student(&request).await {
                    Ok(student) => {
                        Logger::info_with_component(
                            COMPONENT,
                            &format!("Created student {}", student.id),
                        );
                        dispatcher.dispatch(RosterAction::Created(student));
                        alert(CREATE_SUCCEEDED);
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            COMPONENT,
                            &format!("Failed to create student: {}", e),
                        );
                        alert(&create_failure_message(&e));
                    }
                }

                submitting.set(false);
            });
        })
    };

    let remove = {
        let api_client = api_client.clone();
        let dispatcher = state.dispatcher();

        use_callback((), move |id: String, _| {
            let Some(id) = pending_delete(id.clone(), confirm) else {
                Logger::debug_with_component(COMPONENT, &format!("Deletion of {} cancelled", id));
                return;
            };

            let api_client = api_client.clone();
            let dispatcher = dispatcher.clone();

            spawn_local(async move {
                match api_client.delete_student(&id).await {
                    Ok(()) => {
                        Logger::info_with_component(COMPONENT, &format!("Deleted student {}", id));
                        dispatcher.dispatch(RosterAction::Removed(id));
                        alert(DELETE_SUCCEEDED);
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            COMPONENT,
                            &format!("Failed to delete student {}: {}", id, e),
                        );
                        alert(DELETE_FAILED);
                    }
                }
            });
        })
    };

    let set_filter = {
        let dispatcher = state.dispatcher();
        use_callback((), move |(field, value): (FilterField, String), _| {
            dispatcher.dispatch(RosterAction::Filter(field, value));
        })
    };

    let sort = {
        let dispatcher = state.dispatcher();
        use_callback((), move |field: SortField, _| {
            dispatcher.dispatch(RosterAction::Sort(field));
        })
    };

    // Load initial data
    use_effect_with((), {
        let load = load.clone();
        move |_| {
            load.emit(());
            || ()
        }
    });

    let view = RosterViewState {
        rows: state.roster.rows(date_utils::today()),
        sort: state.roster.sort(),
        filters: state.roster.filters().clone(),
        total: state.roster.students().len(),
        loading: *loading,
        submitting: *submitting,
        form_errors: (*form_errors).clone(),
        created_count: state.created_count,
    };

    let actions = UseRosterActions {
        load,
        create,
        remove,
        set_filter,
        sort,
    };

    UseRosterResult {
        state: view,
        actions,
    }
}
