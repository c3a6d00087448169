use std::rc::Rc;

use shared::validation::MIN_STUDY_START_YEAR;
use shared::{StudentDraft, StudentField};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::date_utils;

pub enum DraftAction {
    Set(StudentField, String),
    Reset,
}

#[derive(Default, PartialEq)]
struct DraftState {
    draft: StudentDraft,
}

impl Reducible for DraftState {
    type Action = DraftAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            DraftAction::Set(field, value) => {
                let mut draft = self.draft.clone();
                draft.set(field, value);
                Rc::new(Self { draft })
            }
            DraftAction::Reset => Rc::new(Self::default()),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct StudentFormProps {
    pub errors: Vec<String>,
    pub submitting: bool,
    /// The form clears itself whenever this value changes
    pub reset_token: u32,
    pub on_submit: Callback<StudentDraft>,
}

#[function_component(StudentForm)]
pub fn student_form(props: &StudentFormProps) -> Html {
    let state = use_reducer(DraftState::default);

    use_effect_with(props.reset_token, {
        let dispatcher = state.dispatcher();
        move |_| {
            dispatcher.dispatch(DraftAction::Reset);
            || ()
        }
    });

    let on_submit = {
        let on_submit = props.on_submit.clone();
        let draft = state.draft.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(draft.clone());
        })
    };

    let today = date_utils::today();

    html! {
        <section class="add-student-section">
            <h2>{"Добавить студента"}</h2>

            <div
                id="formErrors"
                class={classes!("form-errors", (!props.errors.is_empty()).then_some("show"))}
            >
                {for props.errors.iter().map(|error| html! { <p>{error}</p> })}
            </div>

            <form id="studentForm" class="student-form" onsubmit={on_submit}>
                {for StudentField::ALL.iter().map(|field| {
                    let field = *field;
                    let oninput = {
                        let dispatcher = state.dispatcher();
                        Callback::from(move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            dispatcher.dispatch(DraftAction::Set(field, input.value()));
                        })
                    };

                    let (input_type, min, max) = match field {
                        StudentField::Birthday => (
                            "date",
                            Some("1900-01-01".to_string()),
                            Some(date_utils::to_input_value(today)),
                        ),
                        StudentField::StudyStart => (
                            "number",
                            Some(MIN_STUDY_START_YEAR.to_string()),
                            Some(date_utils::current_year().to_string()),
                        ),
                        _ => ("text", None, None),
                    };

                    html! {
                        <div class="form-group">
                            <label for={field.input_id()}>{field.label()}</label>
                            <input
                                type={input_type}
                                id={field.input_id()}
                                name={field.input_id()}
                                value={state.draft.get(field).to_string()}
                                {min}
                                {max}
                                {oninput}
                                disabled={props.submitting}
                            />
                        </div>
                    }
                })}

                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled={props.submitting}
                >
                    {if props.submitting {
                        "Сохранение..."
                    } else {
                        "Добавить студента"
                    }}
                </button>
            </form>
        </section>
    }
}
