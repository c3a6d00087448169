use shared::{FormattedStudent, SortField, SortState};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StudentTableProps {
    pub rows: Vec<FormattedStudent>,
    pub sort: SortState,
    pub loading: bool,
    pub on_sort: Callback<SortField>,
    pub on_delete: Callback<String>,
}

/// Text of the single full-width row shown instead of student rows, if any
fn placeholder_text(loading: bool, row_count: usize) -> Option<&'static str> {
    match (row_count, loading) {
        (0, true) => Some("Загрузка студентов..."),
        (0, false) => Some("Студенты не найдены"),
        _ => None,
    }
}

#[function_component(StudentTable)]
pub fn student_table(props: &StudentTableProps) -> Html {
    html! {
        <section class="students-section">
            <h2>{"Студенты"}</h2>

            <div class="table-container">
                <table class="students-table">
                    <thead>
                        <tr>
                            {for SortField::ALL.iter().map(|field| {
                                let field = *field;
                                let on_sort = props.on_sort.clone();
                                html! {
                                    <th
                                        data-sort={field.as_str()}
                                        class="sortable"
                                        onclick={Callback::from(move |_: MouseEvent| on_sort.emit(field))}
                                    >
                                        {format!("{}{}", field.title(), props.sort.indicator_for(field))}
                                    </th>
                                }
                            })}
                            <th>{"Действия"}</th>
                        </tr>
                    </thead>
                    <tbody id="studentsTableBody">
                        {match placeholder_text(props.loading, props.rows.len()) {
                            Some(text) => html! {
                                <tr>
                                    <td colspan="5" class={classes!("empty-row", props.loading.then_some("loading"))}>
                                        {text}
                                    </td>
                                </tr>
                            },
                            None => html! {
                                <>
                                {for props.rows.iter().map(|row| {
                                    let on_delete = props.on_delete.clone();
                                    let id = row.id.clone();
                                    html! {
                                        <tr key={row.id.clone()}>
                                            <td class="fio">{&row.full_name}</td>
                                            <td class="faculty">{&row.faculty}</td>
                                            <td class="birthday">{&row.birthday_display}</td>
                                            <td class="study">{&row.study_display}</td>
                                            <td>
                                                <button
                                                    class="btn btn-danger"
                                                    onclick={Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))}
                                                >
                                                    {"Удалить"}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })}
                                </>
                            },
                        }}
                    </tbody>
                </table>
            </div>
        </section>
    }
}
