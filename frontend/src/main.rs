use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod services;

use components::{FiltersPanel, Header, StudentForm, StudentTable};
use hooks::use_roster;
use services::api::ApiClient;

#[function_component(App)]
fn app() -> Html {
    let api_client = use_memo((), |_| ApiClient::new());
    let roster = use_roster(&api_client);
    let state = roster.state;
    let actions = roster.actions;

    html! {
        <>
            <Header
                total={state.total}
                visible={state.rows.len()}
                loading={state.loading}
                on_refresh={actions.load.clone()}
            />

            <main class="main">
                <div class="container">
                    <StudentForm
                        errors={state.form_errors.clone()}
                        submitting={state.submitting}
                        reset_token={state.created_count}
                        on_submit={actions.create.clone()}
                    />

                    <FiltersPanel
                        filters={state.filters.clone()}
                        on_change={actions.set_filter.clone()}
                    />

                    <StudentTable
                        rows={state.rows.clone()}
                        sort={state.sort}
                        loading={state.loading}
                        on_sort={actions.sort.clone()}
                        on_delete={actions.remove.clone()}
                    />
                </div>
            </main>
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
