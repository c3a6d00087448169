use shared::{FilterField, StudentFilters};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FiltersPanelProps {
    pub filters: StudentFilters,
    pub on_change: Callback<(FilterField, String)>,
}

/// Keyboard hint for the year filters, which are plain text inputs
fn input_mode(field: FilterField) -> Option<&'static str> {
    match field {
        FilterField::StartYear | FilterField::EndYear => Some("numeric"),
        FilterField::Fio | FilterField::Faculty => None,
    }
}

/// Filter inputs; every keystroke updates the view.
#[function_component(FiltersPanel)]
pub fn filters_panel(props: &FiltersPanelProps) -> Html {
    html! {
        <section class="filters-section">
            <h2>{"Фильтры"}</h2>
            <div class="filters-grid">
                {for FilterField::ALL.iter().map(|field| {
                    let field = *field;
                    let on_change = props.on_change.clone();
                    let oninput = Callback::from(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        on_change.emit((field, input.value()));
                    });
                    html! {
                        <div class="form-group">
                            <input
                                type="text"
                                inputmode={input_mode(field)}
                                id={field.input_id()}
                                placeholder={field.placeholder()}
                                value={props.filters.get(field).to_string()}
                                {oninput}
                            />
                        </div>
                    }
                })}
            </div>
        </section>
    }
}
