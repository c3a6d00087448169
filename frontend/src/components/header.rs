use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub total: usize,
    pub visible: usize,
    pub loading: bool,
    pub on_refresh: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_refresh = {
        let on_refresh = props.on_refresh.clone();
        Callback::from(move |_: MouseEvent| on_refresh.emit(()))
    };

    html! {
        <header class="header">
            <div class="container">
                <h1>{"Список студентов"}</h1>
                <div class="header-right">
                    <span class="roster-summary">
                        {if props.loading {
                            "Загрузка...".to_string()
                        } else if props.visible == props.total {
                            format!("Всего студентов: {}", props.total)
                        } else {
                            format!("Показано {} из {}", props.visible, props.total)
                        }}
                    </span>
                    <button
                        type="button"
                        class="btn btn-secondary"
                        onclick={on_refresh}
                        disabled={props.loading}
                    >
                        {"Обновить"}
                    </button>
                </div>
            </div>
        </header>
    }
}
